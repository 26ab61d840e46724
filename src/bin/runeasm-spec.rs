//! runeasm-spec — renders the bundled language packs as reference docs.
//!
//! # Usage
//!
//! ```bash
//! # Markdown reference to stdout:
//! cargo run --bin runeasm-spec
//!
//! # One markdown file per pack into a directory:
//! cargo run --bin runeasm-spec -- specs/
//!
//! # JSON listing for host tooling:
//! cargo run --bin runeasm-spec -- --json
//! ```

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use runeasm::{standard_sets, InstructionRegistry, InstructionSet};

fn main() -> Result<()> {
    let mut json = false;
    let mut out_dir: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" | "-j" => json = true,
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            other if other.starts_with('-') => {
                print_help();
                bail!("unknown option: {}", other);
            }
            other => out_dir = Some(PathBuf::from(other)),
        }
    }

    let mut registry = InstructionRegistry::new();
    for set in standard_sets() {
        for warning in registry.register(set) {
            eprintln!("WARN: {}", warning);
        }
    }

    if json {
        let rendered = serde_json::to_string_pretty(&registry.summaries())
            .context("serializing instruction listing")?;
        println!("{}", rendered);
        return Ok(());
    }

    match out_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            for set in registry.sets() {
                let path = dir.join(format!("{}.md", set.name()));
                fs::write(&path, render_set(set.as_ref()))
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("  wrote {}", path.display());
            }
        }
        None => {
            for set in registry.sets() {
                print!("{}", render_set(set.as_ref()));
            }
        }
    }

    Ok(())
}

fn render_set(set: &dyn InstructionSet) -> String {
    let mut s = String::new();
    let (maj, min, pat) = set.version();

    writeln!(s, "# {} v{}.{}.{}", set.name(), maj, min, pat).unwrap();
    writeln!(s).unwrap();
    writeln!(s, "{}", set.description()).unwrap();
    writeln!(s).unwrap();
    writeln!(s, "**Instructions:** {}", set.instructions().len()).unwrap();
    writeln!(s).unwrap();
    writeln!(s, "| Mnemonic | Syntax | Format | Pattern | Description |").unwrap();
    writeln!(s, "|----------|--------|--------|---------|-------------|").unwrap();

    for def in set.instructions() {
        writeln!(
            s,
            "| `{}` | `{}` | {} | `{}` | {} |",
            def.mnemonic(),
            def.example(),
            def.format(),
            def.pattern().template(),
            def.description()
        )
        .unwrap();
    }

    s
}

fn print_help() {
    eprintln!("runeasm-spec - Render the bundled instruction sets as reference docs");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    runeasm-spec [OPTIONS] [OUT_DIR]");
    eprintln!();
    eprintln!("ARGS:");
    eprintln!("    [OUT_DIR]    Write one markdown file per pack here instead of stdout");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -j, --json    Emit a JSON instruction listing to stdout");
    eprintln!("    -h, --help    Print this help message");
}
