//! The demonstration sequence.
//!
//! Everything observable about this program is the ordered lines written
//! here. The sequence takes a `Write` sink instead of printing directly so
//! the integration tests can assert on the exact output.

use std::io::{self, Write};

use contrast_core::{UserId, same_instance, structural_hash};
use contrast_people::{InitialedName, PersonCard, PersonName, User};

const SEPARATOR: &str =
    "***************************************************************************";

/// Run the whole demonstration, writing every line to `out`.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let name_a = PersonName::new("Ana", "Helena");
    let name_b = PersonName::new("Ana", "Helena");
    let name_c = PersonName::new("Joao", "Pereira");

    let card_a = PersonCard::new("Ana", "Helena");
    let card_b = PersonCard::new("Ana", "Helena");
    let card_c = PersonCard::new("Joao", "Pereira");

    writeln!(out, "Value object:")?;
    writeln!(out, "To string: {name_a}")?;
    writeln!(out, "Are the two objects equal? {}", name_a == name_b)?;
    writeln!(
        out,
        "Are the two objects the same instance? {}",
        same_instance(&name_a, &name_b)
    )?;
    writeln!(out, "Are the two objects ==? {}", name_a == name_b)?;
    writeln!(out, "Are the two objects !=? {}", name_a != name_c)?;
    writeln!(out, "Hash of name_a: {}", structural_hash(&name_a))?;
    writeln!(out, "Hash of name_b: {}", structural_hash(&name_b))?;
    writeln!(out, "Hash of name_c: {}", structural_hash(&name_c))?;

    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    // The mutable object implements no structural equality, so every
    // comparison below falls back to identity and the identical-data pair
    // reports NOT equal. That contrast is intentional.
    writeln!(out, "Mutable object:")?;
    writeln!(out, "To string: {card_a}")?;
    writeln!(out, "Are the two objects equal? {}", card_a.is(&card_b))?;
    writeln!(
        out,
        "Are the two objects the same instance? {}",
        card_a.is(&card_b)
    )?;
    writeln!(out, "Are the two objects ==? {}", card_a.is(&card_b))?;
    writeln!(out, "Are the two objects !=? {}", !card_a.is(&card_c))?;
    writeln!(out, "Hash of card_a: {}", card_a.identity_code())?;
    writeln!(out, "Hash of card_b: {}", card_b.identity_code())?;
    writeln!(out, "Hash of card_c: {}", card_c.identity_code())?;

    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    let (given, family) = name_a.clone().into_parts();
    writeln!(
        out,
        "The value of given is {given} and the value of family is {family}"
    )?;

    writeln!(out)?;

    // With-update: a copy of name_a with only the given name replaced.
    let name_d = name_a.with_given_name("Maria");
    writeln!(out, "Maria's name: {name_d}")?;

    writeln!(out)?;

    let user_a = User::new(UserId::new(1), PersonName::new("Ana", "Helena"));
    writeln!(out, "user_a value: {user_a}")?;
    writeln!(
        out,
        "user_a given: {}   family: {}",
        user_a.given_name(),
        user_a.family_name()
    )?;
    writeln!(out, "{}", user_a.greeting())?;

    writeln!(out)?;

    let initialed_a = InitialedName::new("Ana", "Helena");
    writeln!(out, "initialed_a value: {initialed_a}")?;
    writeln!(
        out,
        "initialed_a given: {}   full: {}",
        initialed_a.given_name(),
        initialed_a.full_name()
    )?;
    writeln!(out, "{}", initialed_a.greeting())?;

    Ok(())
}
