use std::path::PathBuf;

use proptest::prelude::*;
use wordlist_feeder::exec::{CommandTemplate, EXEC_NAME_TOKEN, WORDLIST_TOKEN};

// Template text around the token never contains '<', so it cannot form a
// token on its own.
fn filler() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 =:/._-]{0,16}"
}

// Wordlist paths: spaces allowed, and sometimes the literal executable token.
fn wordlist_path() -> impl Strategy<Value = String> {
    ("[a-zA-Z0-9 /._-]{1,24}", any::<bool>(), "[a-zA-Z0-9 ._-]{0,8}").prop_map(
        |(head, with_token, tail)| {
            if with_token {
                format!("{head}{EXEC_NAME_TOKEN}{tail}")
            } else {
                format!("{head}{tail}")
            }
        },
    )
}

proptest! {
    #[test]
    fn wordlist_path_lands_at_token_position(
        prefix in filler(),
        suffix in filler(),
        path in wordlist_path(),
    ) {
        let template = CommandTemplate::parse(format!("{prefix}{WORDLIST_TOKEN}{suffix}")).unwrap();
        let built = template.build(&PathBuf::from(&path), None);

        prop_assert_eq!(&built, &format!("{prefix}{path}{suffix}"));
        prop_assert!(!built.contains(WORDLIST_TOKEN));
    }

    #[test]
    fn exec_name_substitution_leaves_path_intact(
        exec in "[a-z][a-z0-9_-]{0,8}",
        middle in filler(),
        path in wordlist_path(),
    ) {
        let template =
            CommandTemplate::parse(format!("{EXEC_NAME_TOKEN} {middle}{WORDLIST_TOKEN}")).unwrap();
        let built = template.build(&PathBuf::from(&path), Some(&exec));

        prop_assert_eq!(&built, &format!("{exec} {middle}{path}"));
        prop_assert!(built.ends_with(&path));
        prop_assert!(!built.contains(WORDLIST_TOKEN));
    }
}
