//! Password assembly.

use rand::Rng;

use crate::field::Field;

/// Concatenate one fresh fragment from each field, in order.
///
/// No separator is inserted. Fields that produce an empty fragment
/// simply contribute nothing, and an empty sequence yields `""`.
pub fn assemble<'a, I, R>(fields: I, rng: &mut R) -> String
where
    I: IntoIterator<Item = &'a Field>,
    R: Rng + ?Sized,
{
    fields
        .into_iter()
        .fold(String::new(), |mut password, field| {
            password.push_str(&field.generate(&mut *rng));
            password
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Count, SPECIAL_CHARACTERS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_list_is_empty_password() {
        let fields: [Field; 0] = [];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(assemble(&fields, &mut rng), "");
    }

    #[test]
    fn fragments_follow_field_order() {
        let fields = [
            Field::from_words(["Big"]),
            Field::from_words(["House"]),
            Field::Digits(Count::new(2).unwrap()),
            Field::Characters(Count::new(1).unwrap()),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let password = assemble(&fields, &mut rng);

        assert!(password.starts_with("BigHouse"));
        let tail: Vec<char> = password["BigHouse".len()..].chars().collect();
        assert_eq!(tail.len(), 3);
        assert!(tail[..2].iter().all(char::is_ascii_digit));
        assert!(SPECIAL_CHARACTERS.contains(&tail[2]));
    }

    #[test]
    fn blank_fields_contribute_nothing() {
        let fields = [Field::Words("  \n".into()), Field::from_words(["Shoe"])];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(assemble(&fields, &mut rng), "Shoe");
    }

    #[test]
    fn same_seed_same_password() {
        let fields = [
            Field::from_words(["Pink", "Big", "Small"]),
            Field::Digits(Count::new(8).unwrap()),
        ];
        let a = assemble(&fields, &mut StdRng::seed_from_u64(1));
        let b = assemble(&fields, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
