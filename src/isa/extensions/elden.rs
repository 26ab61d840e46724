//! EldenRing language pack.
//!
//! Fourteen instructions that model a bare-bones souls-like combat loop on
//! top of the host register file. The set leans on a fixed register
//! convention for its stat roles:
//!
//! ```text
//! $t1 (9)   HP         $t4 (12)  INT
//! $t2 (10)  FP         $t5 (13)  enemy HP
//! $t3 (11)  STR        $t6 (14)  enemy STR
//! ```
//!
//! Healing and buffs add or double with wrapping arithmetic; damage floors
//! at 0 rather than going negative. `crf` is I-format under opcode
//! `001000`; everything else is R-format under the `011100` extension
//! block with a distinct funct code.

use crate::error::Result;
use crate::isa::encoding::{BitPattern, InstructionFormat};
use crate::isa::extension::InstructionSet;
use crate::isa::instruction::{BasicInstruction, ExecRoutine, ExecutionContext};
use rand::Rng;

/// Register the Focus Point cost of `intd` lands on: `$t2`, where the
/// set's convention keeps FP. Mutated outside the declared operand list.
pub const FP_REGISTER: u8 = 10;

/// Bounds of the uniform stat roll performed by `che`.
const ENEMY_STAT_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

/// The EldenRing custom language pack.
pub struct EldenRingSet {
    instructions: Vec<BasicInstruction>,
}

impl EldenRingSet {
    pub fn new() -> Self {
        use InstructionFormat::{I, R};
        Self {
            instructions: vec![
                def(
                    "crf $t1",
                    "Crimson Flask: Add 5 points to your HP($t1)",
                    I,
                    "001000 fffff 00000 0000000000000000",
                    exec_crimson_flask,
                ),
                def(
                    "cef $t2",
                    "Cerulean Flask: Add 5 points to your FP($t2)",
                    R,
                    "011100 fffff 00000 00000 00000 100000",
                    exec_cerulean_flask,
                ),
                def(
                    "lvlup $t1, $t2, $t3, $t4",
                    "Level Up: Add 1 point to each stat($t1-$t4)",
                    R,
                    "011100 fffff sssss ttttt rrrrr 100001",
                    exec_level_up,
                ),
                def(
                    "grace $t1, $t2",
                    "Grace: Restores 10 points to HP($t1) and FP($t2)",
                    R,
                    "011100 fffff sssss 00000 00000 100010",
                    exec_grace,
                ),
                def(
                    "lat $t1, $t2, $t3, $t4",
                    "Larval Tear: Set all your stats($t1-$t4) back to 1",
                    R,
                    "011100 fffff sssss ttttt rrrrr 100011",
                    exec_larval_tear,
                ),
                def(
                    "runea $t1, $t2, $t3, $t4",
                    "Rune Arc: Add 5 points to all of your stats($t1-$t4)",
                    R,
                    "011100 fffff sssss ttttt rrrrr 100100",
                    exec_rune_arc,
                ),
                def(
                    "che $t5, $t6",
                    "Change Enemy: Change the enemies stats($t5,$t6) to random values",
                    R,
                    "011100 fffff sssss 00000 00000 100101",
                    exec_change_enemy,
                ),
                def(
                    "tad $t1, $t6",
                    "Take Damage: Subtract your HP($t1) depending on the enemies STR($t6)",
                    R,
                    "011100 fffff sssss 00000 00000 100110",
                    exec_take_damage,
                ),
                def(
                    "strd $t3, $t5",
                    "STR Damage: Subtract the enemies HP($t5) depending on your STR($t3)",
                    R,
                    "011100 fffff sssss 00000 00000 100111",
                    exec_strength_damage,
                ),
                def(
                    "intd $t4, $t5",
                    "INT Damage: Subtract the enemies HP($t5) depending on your INT($t4) and subtract 2 points from your FP($t2)",
                    R,
                    "011100 fffff sssss 00000 00000 101000",
                    exec_intelligence_damage,
                ),
                def(
                    "sms $t3",
                    "Smithing Stone: Add 2 points to your STR($t3)",
                    R,
                    "011100 fffff 00000 00000 00000 101001",
                    exec_smithing_stone,
                ),
                def(
                    "mes $t4",
                    "Memory Stone: Add 2 points to your INT($t4)",
                    R,
                    "011100 fffff 00000 00000 00000 101010",
                    exec_memory_stone,
                ),
                def(
                    "grune $t1, $t2, $t3, $t4",
                    "Great Rune: Doubles all of your stats($t1-$t4)",
                    R,
                    "011100 fffff sssss ttttt rrrrr 101011",
                    exec_great_rune,
                ),
                def(
                    "gvow $t1",
                    "Golden Vow: Doubles your HP($t1)",
                    R,
                    "011100 fffff 00000 00000 00000 101100",
                    exec_golden_vow,
                ),
                def(
                    "mfla $t1, $t3, $t4",
                    "Midra's Flame: Reduce your HP($t1) by half and double your STR($t3) and INT($t4)",
                    R,
                    "011100 fffff sssss ttttt 00000 101101",
                    exec_midras_flame,
                ),
            ],
        }
    }
}

impl Default for EldenRingSet {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionSet for EldenRingSet {
    fn name(&self) -> &str {
        "EldenRing"
    }

    fn description(&self) -> &str {
        "Assembly language that allows you to simulate a basic EldenRing game"
    }

    fn version(&self) -> (u16, u16, u16) {
        (1, 0, 0)
    }

    fn instructions(&self) -> &[BasicInstruction] {
        &self.instructions
    }
}

/// Build one definition, panicking on a malformed static template.
fn def(
    example: &'static str,
    description: &'static str,
    format: InstructionFormat,
    template: &'static str,
    routine: ExecRoutine,
) -> BasicInstruction {
    let pattern = BitPattern::parse(format, template)
        .unwrap_or_else(|e| panic!("invalid pattern for {:?}: {}", example, e));
    BasicInstruction::new(example, description, pattern, routine)
}

// ─── Effect helpers ──────────────────────────────────────────────────────────

fn add_to(ctx: &mut ExecutionContext, reg: u8, amount: i32) -> Result<()> {
    let current = ctx.registers.get(reg)?;
    ctx.registers.set(reg, current.wrapping_add(amount))
}

fn double(ctx: &mut ExecutionContext, reg: u8) -> Result<()> {
    let current = ctx.registers.get(reg)?;
    ctx.registers.set(reg, current.wrapping_mul(2))
}

/// Subtract `amount` from `reg`, flooring the result at 0.
fn drain(ctx: &mut ExecutionContext, reg: u8, amount: i32) -> Result<()> {
    let current = ctx.registers.get(reg)?;
    ctx.registers.set(reg, current.saturating_sub(amount).max(0))
}

// ─── Execution routines ──────────────────────────────────────────────────────

fn exec_crimson_flask(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    add_to(ctx, operands[0], 5)
}

fn exec_cerulean_flask(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    add_to(ctx, operands[0], 5)
}

fn exec_level_up(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    for &reg in operands {
        add_to(ctx, reg, 1)?;
    }
    Ok(())
}

fn exec_grace(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    add_to(ctx, operands[0], 10)?;
    add_to(ctx, operands[1], 10)
}

fn exec_larval_tear(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    for &reg in operands {
        ctx.registers.set(reg, 1)?;
    }
    Ok(())
}

fn exec_rune_arc(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    for &reg in operands {
        add_to(ctx, reg, 5)?;
    }
    Ok(())
}

fn exec_change_enemy(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    let roll = ctx.rng.gen_range(ENEMY_STAT_RANGE);
    ctx.registers.set(operands[0], roll)?;
    let roll = ctx.rng.gen_range(ENEMY_STAT_RANGE);
    ctx.registers.set(operands[1], roll)
}

fn exec_take_damage(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    let enemy_str = ctx.registers.get(operands[1])?;
    drain(ctx, operands[0], enemy_str)
}

fn exec_strength_damage(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    let my_str = ctx.registers.get(operands[0])?;
    drain(ctx, operands[1], my_str)
}

fn exec_intelligence_damage(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    let my_int = ctx.registers.get(operands[0])?;
    drain(ctx, operands[1], my_int)?;
    // Focus cost lands on $t2 regardless of the operand list; the set's
    // register convention pins FP there.
    drain(ctx, FP_REGISTER, 2)
}

fn exec_smithing_stone(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    add_to(ctx, operands[0], 2)
}

fn exec_memory_stone(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    add_to(ctx, operands[0], 2)
}

fn exec_great_rune(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    for &reg in operands {
        double(ctx, reg)?;
    }
    Ok(())
}

fn exec_golden_vow(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    double(ctx, operands[0])
}

fn exec_midras_flame(operands: &[u8], ctx: &mut ExecutionContext) -> Result<()> {
    let hp = ctx.registers.get(operands[0])?;
    ctx.registers.set(operands[0], hp / 2)?;
    double(ctx, operands[1])?;
    double(ctx, operands[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::register::{MipsRegisterFile, RegisterFile};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Register convention of the set
    const HP: u8 = 9;
    const FP: u8 = 10;
    const STR: u8 = 11;
    const INT: u8 = 12;
    const ENEMY_HP: u8 = 13;
    const ENEMY_STR: u8 = 14;

    fn run_seeded(mnemonic: &str, operands: &[u8], regs: &mut MipsRegisterFile, seed: u64) {
        let set = EldenRingSet::new();
        let def = set
            .instructions()
            .iter()
            .find(|d| d.mnemonic() == mnemonic)
            .unwrap_or_else(|| panic!("no such mnemonic: {}", mnemonic));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = ExecutionContext::new(regs, &mut rng);
        def.execute(operands, &mut ctx).unwrap();
    }

    fn run(mnemonic: &str, operands: &[u8], regs: &mut MipsRegisterFile) {
        run_seeded(mnemonic, operands, regs, 0);
    }

    #[test]
    fn test_set_surface() {
        let set = EldenRingSet::new();
        assert_eq!(set.name(), "EldenRing");
        assert_eq!(set.instructions().len(), 14);
    }

    #[test]
    fn test_mnemonics_unique() {
        let set = EldenRingSet::new();
        for (i, a) in set.instructions().iter().enumerate() {
            for b in &set.instructions()[..i] {
                assert_ne!(a.mnemonic(), b.mnemonic());
            }
        }
    }

    #[test]
    fn test_no_pattern_collisions() {
        let set = EldenRingSet::new();
        for (i, a) in set.instructions().iter().enumerate() {
            for b in &set.instructions()[..i] {
                assert!(
                    !a.pattern().overlaps(b.pattern()),
                    "{} and {} can match the same word",
                    a.mnemonic(),
                    b.mnemonic()
                );
            }
        }
    }

    #[test]
    fn test_operand_counts_match_syntax() {
        let set = EldenRingSet::new();
        for def in set.instructions() {
            let syntax_operands = def.example().split_whitespace().count() - 1;
            assert_eq!(
                def.pattern().operand_count(),
                syntax_operands,
                "{}",
                def.example()
            );
        }
    }

    #[test]
    fn test_crimson_flask_restores_hp() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 20).unwrap();
        run("crf", &[HP], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 25);
    }

    #[test]
    fn test_cerulean_flask_restores_fp() {
        let mut regs = MipsRegisterFile::new();
        regs.set(FP, 3).unwrap();
        run("cef", &[FP], &mut regs);
        assert_eq!(regs.get(FP).unwrap(), 8);
    }

    #[test]
    fn test_level_up_then_larval_tear() {
        let mut regs = MipsRegisterFile::new();
        for (reg, value) in [(HP, 1), (FP, 2), (STR, 3), (INT, 4)] {
            regs.set(reg, value).unwrap();
        }
        run("lvlup", &[HP, FP, STR, INT], &mut regs);
        for (reg, expected) in [(HP, 2), (FP, 3), (STR, 4), (INT, 5)] {
            assert_eq!(regs.get(reg).unwrap(), expected);
        }

        run("lat", &[HP, FP, STR, INT], &mut regs);
        for reg in [HP, FP, STR, INT] {
            assert_eq!(regs.get(reg).unwrap(), 1);
        }
    }

    #[test]
    fn test_larval_tear_idempotent() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 99).unwrap();
        run("lat", &[HP, FP, STR, INT], &mut regs);
        let after_once = regs.clone();
        run("lat", &[HP, FP, STR, INT], &mut regs);
        assert_eq!(regs, after_once);
    }

    #[test]
    fn test_grace_restores_both() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 1).unwrap();
        regs.set(FP, 2).unwrap();
        run("grace", &[HP, FP], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 11);
        assert_eq!(regs.get(FP).unwrap(), 12);
    }

    #[test]
    fn test_rune_arc_boosts_all() {
        let mut regs = MipsRegisterFile::new();
        run("runea", &[HP, FP, STR, INT], &mut regs);
        for reg in [HP, FP, STR, INT] {
            assert_eq!(regs.get(reg).unwrap(), 5);
        }
    }

    #[test]
    fn test_change_enemy_rolls_in_range() {
        for seed in 0..32 {
            let mut regs = MipsRegisterFile::new();
            run_seeded("che", &[ENEMY_HP, ENEMY_STR], &mut regs, seed);
            for reg in [ENEMY_HP, ENEMY_STR] {
                let value = regs.get(reg).unwrap();
                assert!((1..=100).contains(&value), "rolled {}", value);
            }
        }
    }

    #[test]
    fn test_change_enemy_deterministic_under_seed() {
        let mut first = MipsRegisterFile::new();
        let mut second = MipsRegisterFile::new();
        run_seeded("che", &[ENEMY_HP, ENEMY_STR], &mut first, 7);
        run_seeded("che", &[ENEMY_HP, ENEMY_STR], &mut second, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 100).unwrap();
        regs.set(ENEMY_STR, 30).unwrap();
        run("tad", &[HP, ENEMY_STR], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 70);

        regs.set(ENEMY_STR, 80).unwrap();
        run("tad", &[HP, ENEMY_STR], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 0);
    }

    #[test]
    fn test_strength_damage() {
        let mut regs = MipsRegisterFile::new();
        regs.set(STR, 12).unwrap();
        regs.set(ENEMY_HP, 50).unwrap();
        run("strd", &[STR, ENEMY_HP], &mut regs);
        assert_eq!(regs.get(ENEMY_HP).unwrap(), 38);
        assert_eq!(regs.get(STR).unwrap(), 12);
    }

    #[test]
    fn test_damage_never_negative() {
        for (have, hit) in [(0, 1), (5, 5), (10, 1000), (1, i32::MAX)] {
            let mut regs = MipsRegisterFile::new();
            regs.set(ENEMY_HP, have).unwrap();
            regs.set(STR, hit).unwrap();
            run("strd", &[STR, ENEMY_HP], &mut regs);
            assert!(regs.get(ENEMY_HP).unwrap() >= 0);
        }
    }

    #[test]
    fn test_intelligence_damage_costs_focus() {
        let mut regs = MipsRegisterFile::new();
        regs.set(STR, 4).unwrap();
        regs.set(INT, 6).unwrap();
        regs.set(FP, 8).unwrap();
        regs.set(ENEMY_HP, 50).unwrap();
        run("intd", &[INT, ENEMY_HP], &mut regs);
        assert_eq!(regs.get(ENEMY_HP).unwrap(), 44);
        assert_eq!(regs.get(FP).unwrap(), 6);
    }

    #[test]
    fn test_intelligence_damage_floors_both() {
        let mut regs = MipsRegisterFile::new();
        regs.set(INT, 60).unwrap();
        regs.set(FP, 1).unwrap();
        regs.set(ENEMY_HP, 50).unwrap();
        run("intd", &[INT, ENEMY_HP], &mut regs);
        assert_eq!(regs.get(ENEMY_HP).unwrap(), 0);
        assert_eq!(regs.get(FP).unwrap(), 0);
    }

    #[test]
    fn test_smithing_and_memory_stones() {
        let mut regs = MipsRegisterFile::new();
        regs.set(STR, 10).unwrap();
        regs.set(INT, 20).unwrap();
        run("sms", &[STR], &mut regs);
        run("mes", &[INT], &mut regs);
        assert_eq!(regs.get(STR).unwrap(), 12);
        assert_eq!(regs.get(INT).unwrap(), 22);
    }

    #[test]
    fn test_great_rune_doubles_all() {
        let mut regs = MipsRegisterFile::new();
        for (reg, value) in [(HP, 1), (FP, 2), (STR, 3), (INT, 4)] {
            regs.set(reg, value).unwrap();
        }
        run("grune", &[HP, FP, STR, INT], &mut regs);
        for (reg, expected) in [(HP, 2), (FP, 4), (STR, 6), (INT, 8)] {
            assert_eq!(regs.get(reg).unwrap(), expected);
        }
    }

    #[test]
    fn test_golden_vow_twice_quadruples() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 3).unwrap();
        run("gvow", &[HP], &mut regs);
        run("gvow", &[HP], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 12);
    }

    #[test]
    fn test_midras_flame_truncates() {
        let mut regs = MipsRegisterFile::new();
        regs.set(HP, 7).unwrap();
        regs.set(STR, 3).unwrap();
        regs.set(INT, 5).unwrap();
        run("mfla", &[HP, STR, INT], &mut regs);
        assert_eq!(regs.get(HP).unwrap(), 3);
        assert_eq!(regs.get(STR).unwrap(), 6);
        assert_eq!(regs.get(INT).unwrap(), 10);
    }
}
