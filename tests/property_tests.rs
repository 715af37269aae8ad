use proptest::prelude::*;
use tapevm::{interpret, Config, Vm};

proptest! {
    /// Programs without I/O and loops never fail.
    #[test]
    fn straight_line_programs_succeed(program in "[+\\-<> \n]{0,200}") {
        prop_assert_eq!(interpret(&program, ""), Ok(String::new()));
    }

    /// Arbitrary programs either finish or fail, under a step budget.
    #[test]
    fn arbitrary_programs_terminate(program in "[+\\-<>,.\\[\\]]{0,60}", input in "[a-z]{0,5}") {
        let config = Config::default().with_step_limit(Some(5_000));
        let mut vm = Vm::load(&program, &input, config).unwrap();
        let _ = vm.run();
        prop_assert!(vm.steps() <= 5_000);
        prop_assert!(vm.tape().ptr() < vm.tape().len());
    }
}
