//! Black-box test of the demonstration runner: the output is a fixed,
//! ordered sequence of lines, asserted here byte for byte (hash lines are
//! checked by relation, since hashes vary per run).

fn demo_lines() -> Vec<String> {
    let mut buf = Vec::new();
    contrast_cli::demo::run(&mut buf).expect("demo run failed");
    String::from_utf8(buf)
        .expect("demo output was not utf-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn hash_value(line: &str, prefix: &str) -> u64 {
    let rest = line
        .strip_prefix(prefix)
        .unwrap_or_else(|| panic!("expected line starting with {prefix:?}, got {line:?}"));
    rest.parse().expect("hash was not numeric")
}

const SEPARATOR: &str =
    "***************************************************************************";

#[test]
fn output_follows_the_fixed_sequence() {
    let lines = demo_lines();
    assert_eq!(lines.len(), 35, "unexpected line count: {lines:#?}");

    assert_eq!(lines[0], "Value object:");
    assert_eq!(
        lines[1],
        "To string: PersonName { given_name = Ana, family_name = Helena }"
    );
    assert_eq!(lines[2], "Are the two objects equal? true");
    assert_eq!(lines[3], "Are the two objects the same instance? false");
    assert_eq!(lines[4], "Are the two objects ==? true");
    assert_eq!(lines[5], "Are the two objects !=? true");

    assert_eq!(lines[9], "");
    assert_eq!(lines[10], SEPARATOR);
    assert_eq!(lines[11], "");

    assert_eq!(lines[12], "Mutable object:");
    assert_eq!(lines[13], "To string: PersonCard");
    assert_eq!(lines[14], "Are the two objects equal? false");
    assert_eq!(lines[15], "Are the two objects the same instance? false");
    assert_eq!(lines[16], "Are the two objects ==? false");
    assert_eq!(lines[17], "Are the two objects !=? true");

    assert_eq!(lines[21], "");
    assert_eq!(lines[22], SEPARATOR);
    assert_eq!(lines[23], "");

    assert_eq!(
        lines[24],
        "The value of given is Ana and the value of family is Helena"
    );
    assert_eq!(
        lines[26],
        "Maria's name: PersonName { given_name = Maria, family_name = Helena }"
    );
    assert_eq!(
        lines[28],
        "user_a value: User { id = 1, given_name = Ana, family_name = Helena }"
    );
    assert_eq!(lines[29], "user_a given: Ana   family: Helena");
    assert_eq!(lines[30], "Hello Ana");
    assert_eq!(
        lines[32],
        "initialed_a value: InitialedName { given_name = A, family_name = Helena }"
    );
    assert_eq!(lines[33], "initialed_a given: A   full: A Helena");
    assert_eq!(lines[34], "Hello A");
}

#[test]
fn value_object_hashes_agree_for_equal_values() {
    let lines = demo_lines();
    let hash_a = hash_value(&lines[6], "Hash of name_a: ");
    let hash_b = hash_value(&lines[7], "Hash of name_b: ");
    // name_c's hash is expected to differ in practice, but that is not a
    // guarantee worth asserting; the law is the agreement of a and b.
    let _hash_c = hash_value(&lines[8], "Hash of name_c: ");
    assert_eq!(hash_a, hash_b);
}

#[test]
fn mutable_object_hashes_are_identity_derived_and_all_distinct() {
    let lines = demo_lines();
    let hash_a = hash_value(&lines[18], "Hash of card_a: ");
    let hash_b = hash_value(&lines[19], "Hash of card_b: ");
    let hash_c = hash_value(&lines[20], "Hash of card_c: ");
    assert_ne!(hash_a, hash_b);
    assert_ne!(hash_a, hash_c);
    assert_ne!(hash_b, hash_c);
}
