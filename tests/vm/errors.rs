use crate::util::*;
use std::io::{self, Write};

#[test]
fn unknown_instruction_halts() {
    let (result, err) = failure("push 1\npall\nfoo\npush 2\npall");
    assert_eq!(result, "1\n");
    assert_eq!(parse_kind(&err), ParseErrorKind::UnknownInstruction("foo".to_string()));
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "L3: unknown instruction foo");
}

#[test]
fn unknown_instruction_cleanup() {
    let mut vm = VM::new(Vec::new());
    let err = vm.run("push 1\npush 2\nfoo").unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(vm.state(), VMState::RuntimeError);
    assert!(vm.sequence().is_empty());
    assert!(vm.sequence().is_consistent());
}

#[test]
fn opcodes_are_case_sensitive() {
    let (_, err) = failure("PUSH 1");
    assert_eq!(err.to_string(), "L1: unknown instruction PUSH");
    let (_, err) = failure("push 1\nPall");
    assert_eq!(err.to_string(), "L2: unknown instruction Pall");
}

#[test]
fn push_usage() {
    for code in [ "push", "push -", "push abc", "push 12a", "push 1.5", "push +3", "push --1", "push 1-" ] {
        let (_, err) = failure(&format!("nop\n{}\npall", code));
        assert_eq!(parse_kind(&err), ParseErrorKind::InvalidOperand("push"), "for <{}>", code);
        assert_eq!(err.to_string(), "L2: usage: push integer");
    }
}

#[test]
fn pint_empty() {
    let (_, err) = failure("pint");
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::PintEmpty);
    assert_eq!(err.to_string(), "L1: can't pint, stack empty");
}

#[test]
fn pop_empty() {
    let (_, err) = failure("push 1\npop\npop");
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::PopEmpty);
    assert_eq!(err.to_string(), "L3: can't pop an empty stack");
}

#[test]
fn blank_lines_are_counted() {
    let (_, err) = failure("\n\n# comment\nqueue\n\npint");
    assert_eq!(err.to_string(), "L6: can't pint, stack empty");
}

#[test]
fn error_halts_after_output() {
    let (result, err) = failure("push 1\npush 2\npall\npop\npop\npop\npush 3\npall");
    assert_eq!(result, "2\n1\n");
    assert_eq!(err.line(), Some(6));
}

#[test]
fn every_error_releases_sequence() {
    let failing = [
        "push 1\npush 2\nfoo",
        "push 1\npush 2\npush x",
        "push 1\npush 2\npop\npop\npint",
        "push 1\npush 2\npop\npop\npop",
        "push 1\nswap",
        "push 1\nadd",
        "push 1\nsub",
        "push 1\nmul",
        "push 1\npush 0\ndiv",
        "push 1\npush 0\nmod",
        "push 1\npush 200\npchar",
        "push 1\npop\npchar",
    ];
    for code in failing {
        let mut vm = VM::new(Vec::new());
        assert!(vm.run(code).is_err(), "<{}> did not fail", code);
        assert_eq!(vm.state(), VMState::RuntimeError);
        assert!(vm.sequence().is_empty(), "<{}> left {}", code, vm.sequence());
        assert_eq!(vm.into_output(), b"");
    }
}

/// Output sink that fails every write.
struct Broken;

impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure() {
    let mut vm = VM::new(Broken);
    let err = vm.run("push 1\npush 2\npall\npush 3").unwrap_err();
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::Output(io::ErrorKind::BrokenPipe));
    assert_eq!(err.line(), Some(3));
    assert!(vm.sequence().is_empty());
}

#[test]
fn reader_source() {
    let mut vm = VM::new(Vec::new());
    vm.run_reader(io::Cursor::new("push 1\r\npush 2\n\npall\n")).unwrap();
    assert_eq!(vm.line(), 4);
    assert_eq!(vm.output(), b"2\n1\n");
    vm.run("push 3\npint").unwrap();
    assert_eq!(vm.output(), b"2\n1\n3\n");
    assert_eq!(vm.into_output(), b"2\n1\n3\n");
}

#[test]
fn reader_failure() {
    let mut vm = VM::new(Vec::new());
    let err = vm.run_reader(io::Cursor::new(b"push 1\npall\n\xff\xfe\npall\n".to_vec())).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
    assert_eq!(err.line(), None);
    assert!(vm.sequence().is_empty());
    assert_eq!(vm.into_output(), b"1\n");
}
