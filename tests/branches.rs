mod common;

use common::*;
use mips_disasm::{DisasmConfig, Disassembler, Mips32Decoder, OutputLine};
use pretty_assertions::assert_eq;

#[test]
fn backward_branch_splices_label_at_destination() {
    // slots 0..9: add, slot 10: bne -7 -> slot 3
    let mut words = vec![add(); 10];
    words.push(bne(0xFFF9));

    let mut want = vec![ADD; 3];
    want.push("Addr_000c:");
    want.extend([ADD; 7]);
    want.push("\tbne, $t1, $t0, Addr_000c");

    assert_eq!(run(&words).unwrap(), want);
}

#[test]
fn forward_branch_discharged_at_branch_slot() {
    // slot 0: beq +2 -> pending slot 2 ("000c"); slot 2 holds a branch
    let words = [beq(2), add(), bne(1), add()];
    assert_eq!(
        run(&words).unwrap(),
        vec!["\tbeq, $t1, $t0, Addr_000c", ADD, "Addr_000c:", ADD]
    );
}

#[test]
fn forward_label_skipped_when_target_is_not_a_branch() {
    let words = [beq(1), add(), add()];
    assert_eq!(run(&words).unwrap(), vec!["\tbeq, $t1, $t0, Addr_0008", ADD, ADD]);
}

#[test]
fn second_forward_branch_replaces_pending_target() {
    // beq +3 (slot 3, "0010") is superseded by beq +1 (slot 2, "000c")
    let words = [beq(3), beq(1), beq(5), beq(0)];
    assert_eq!(
        run(&words).unwrap(),
        vec![
            "\tbeq, $t1, $t0, Addr_0010",
            "\tbeq, $t1, $t0, Addr_000c",
            "Addr_000c:",
            "\tbeq, $t1, $t0, Addr_0010",
        ]
    );
}

#[test]
fn discharge_wins_over_backward_resolution() {
    let words = [beq(1), bne(0xFFFF)];
    assert_eq!(run(&words).unwrap(), vec!["\tbeq, $t1, $t0, Addr_0008", "Addr_0008:"]);
}

#[test]
fn backward_branch_reuses_existing_label() {
    let words = [add(), add(), bne(0xFFFF), bne(0xFFFE)];
    assert_eq!(
        run(&words).unwrap(),
        vec![
            ADD,
            "Addr_0004:",
            ADD,
            "\tbne, $t1, $t0, Addr_0004",
            "\tbne, $t1, $t0, Addr_0004",
        ]
    );
}

#[test]
fn splice_does_not_rewrite_earlier_text() {
    // The second splice lands by buffer position, which the first splice has
    // already shifted; both labels keep the text computed for them.
    let words = [add(), add(), add(), add(), bne(0xFFFD), bne(0xFFFE)];
    assert_eq!(
        run(&words).unwrap(),
        vec![
            ADD,
            "Addr_0004:",
            ADD,
            "Addr_000c:",
            ADD,
            ADD,
            "\tbne, $t1, $t0, Addr_0004",
            "\tbne, $t1, $t0, Addr_000c",
        ]
    );
}

#[test]
fn backward_destination_clamps_to_zero() {
    let words = [add(), bne(0xFFF0)];
    assert_eq!(run(&words).unwrap(), vec!["Addr_0000:", ADD, "\tbne, $t1, $t0, Addr_0000"]);
}

#[test]
fn pending_state_is_observable_per_step() {
    let mut d = Disassembler::new(Mips32Decoder::new(), DisasmConfig::default());
    assert!(d.pending().is_none());

    d.step(0, beq(2)).unwrap();
    let p = d.pending().unwrap();
    assert_eq!((p.target_slot, p.addr_text.as_str()), (2, "000c"));

    d.step(1, add()).unwrap();
    d.step(2, bne(0)).unwrap();
    assert_eq!(d.buffer().lines().last(), Some(&OutputLine::Label("000c".into())));
    assert_eq!(d.buffer().len(), 3);
}

#[test]
fn branch_at_slot_zero_is_not_discharged() {
    assert_eq!(run(&[beq(0)]).unwrap(), vec!["\tbeq, $t1, $t0, Addr_0004"]);
}
