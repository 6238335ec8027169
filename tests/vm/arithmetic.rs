use crate::util::*;

#[test]
fn add() {
    assert_eq!(output("push 1\npush 2\nadd\npall"), "3\n");
}

#[test]
fn sub() {
    assert_eq!(output("push 5\npush 3\nsub\npint"), "2\n");
    assert_eq!(output("push 3\npush 5\nsub\npint"), "-2\n");
}

#[test]
fn mul() {
    assert_eq!(output("push -4\npush 6\nmul\npint"), "-24\n");
}

#[test]
fn div() {
    assert_eq!(output("push 7\npush 2\ndiv\npint"), "3\n");
    assert_eq!(output("push -7\npush 2\ndiv\npint"), "-3\n");
    assert_eq!(output("push 2\npush 7\ndiv\npint"), "0\n");
}

#[test]
fn modulo() {
    assert_eq!(output("push 7\npush 3\nmod\npint"), "1\n");
    assert_eq!(output("push -7\npush 3\nmod\npint"), "-1\n");
    assert_eq!(output("push 7\npush -3\nmod\npint"), "1\n");
}

#[test]
fn reduces_length_by_one() {
    for opcode in [ "add", "sub", "mul", "div", "mod" ] {
        let mut vm = VM::new(Vec::new());
        let code = format!("{}{}\npall", pushed(&[ 3, 9, 1, 2 ]), opcode);
        vm.run(&code).unwrap();
        let lines = String::from_utf8(vm.into_output()).unwrap();
        let lines: Vec<&str> = lines.lines().collect();
        assert_eq!(lines.len(), 3, "{} left {:?}", opcode, lines);
        assert_eq!(&lines[1..], &[ "1", "2" ], "{} modified the remainder", opcode);
    }
}

#[test]
fn results_at_head() {
    let code = pushed(&[ 4, 12, 100 ]);
    assert_eq!(output(&format!("{}add\npint", code)), "16\n");
    assert_eq!(output(&format!("{}sub\npint", code)), "8\n");
    assert_eq!(output(&format!("{}mul\npint", code)), "48\n");
    assert_eq!(output(&format!("{}div\npint", code)), "3\n");
    assert_eq!(output(&format!("{}mod\npint", code)), "0\n");
}

#[test]
fn chained() {
    let result = output("
        push 1
        push 2
        push 3
        push 4
        add
        mul
        sub
        pall
    ");
    assert_eq!(result, "-13\n");
}

#[test]
fn wrapping() {
    assert_eq!(output("push 2147483647\npush 1\nadd\npint"), "-2147483648\n");
    assert_eq!(output("push -2147483648\npush 1\nsub\npint"), "2147483647\n");
    assert_eq!(output("push -2147483648\npush -1\ndiv\npint"), "-2147483648\n");
    assert_eq!(output("push -2147483648\npush -1\nmod\npint"), "0\n");
}

#[test]
fn division_by_zero() {
    for opcode in [ "div", "mod" ] {
        for dividend in [ 0, 1, -5 ] {
            let (result, err) = failure(&format!("push {}\npush 0\n{}\npall", dividend, opcode));
            assert_eq!(result, "");
            assert_eq!(runtime_kind(&err), RuntimeErrorKind::DivisionByZero);
            assert_eq!(err.to_string(), "L3: division by zero");
        }
    }
}

#[test]
fn division_by_zero_releases_sequence() {
    let mut vm = VM::new(Vec::new());
    let err = vm.run("push 8\npush 0\ndiv").unwrap_err();
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::DivisionByZero);
    assert_eq!(vm.state(), VMState::RuntimeError);
    assert!(vm.sequence().is_empty());
}

#[test]
fn shortage() {
    for opcode in [ "swap", "add", "sub", "mul", "div", "mod" ] {
        for setup in [ "", "push 1\n" ] {
            let (_, err) = failure(&format!("{}{}", setup, opcode));
            let expected_line = if setup.is_empty() { 1 } else { 2 };
            assert_eq!(runtime_kind(&err), RuntimeErrorKind::StackTooShort(opcode));
            assert_eq!(err.to_string(), format!("L{}: can't {}, stack too short", expected_line, opcode));
        }
    }
}

#[test]
fn shortage_before_division_by_zero() {
    let (_, err) = failure("push 0\ndiv");
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::StackTooShort("div"));
}
