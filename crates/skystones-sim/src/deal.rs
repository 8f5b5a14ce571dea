//! Building the two starting hands.

use rand::seq::SliceRandom;
use rand::Rng;
use skystones_core::{Card, CardDefinition, CardId, CardLibrary, Facing};

/// Visitor card ids start here so the two hands never collide
const VISITOR_ID_BASE: u32 = 1000;

/// Card from an old top/bottom/left/right card sheet
fn legacy(id: u32, name: &str, top: u32, bottom: u32, left: u32, right: u32) -> Card {
    Card::new(CardId::new(id), name, Facing::new(top, bottom, right, left))
}

/// The fixed demo hands as (host, visitor)
pub fn demo_hands() -> (Vec<Card>, Vec<Card>) {
    let host = vec![
        legacy(1, "Rock", 3, 2, 5, 1),
        legacy(2, "Stone", 2, 4, 1, 3),
        legacy(3, "Boulder", 4, 1, 2, 5),
        legacy(4, "Quartz", 1, 5, 3, 2),
        legacy(5, "Granite", 2, 3, 4, 1),
        legacy(6, "Obsidian", 3, 3, 2, 2),
        legacy(7, "Lava", 4, 2, 1, 5),
        legacy(8, "Marble", 1, 4, 3, 2),
    ];
    let v = VISITOR_ID_BASE;
    let visitor = vec![
        legacy(v + 1, "Spike", 2, 4, 3, 2),
        legacy(v + 2, "Blade", 5, 1, 2, 3),
        legacy(v + 3, "Shard", 3, 3, 1, 4),
        legacy(v + 4, "Crystal", 2, 5, 4, 1),
        legacy(v + 5, "Fang", 4, 2, 3, 2),
        legacy(v + 6, "Dagger", 1, 3, 5, 1),
        legacy(v + 7, "Saber", 3, 1, 2, 4),
        legacy(v + 8, "Claw", 2, 4, 1, 3),
    ];
    (host, visitor)
}

/// Draw `hand_size` cards per player from `library`, with replacement.
///
/// Returns two empty hands if the library is empty.
pub fn random_hands<R: Rng>(
    library: &CardLibrary,
    hand_size: usize,
    rng: &mut R,
) -> (Vec<Card>, Vec<Card>) {
    let defs: Vec<&CardDefinition> = library.iter().collect();
    let mut draw = |base: u32| -> Vec<Card> {
        (0..hand_size as u32)
            .filter_map(|i| defs.choose(rng).map(|def| def.instantiate(CardId::new(base + i))))
            .collect()
    };
    let host = draw(1);
    let visitor = draw(VISITOR_ID_BASE + 1);
    (host, visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use skystones_core::Direction;

    #[test]
    fn test_demo_hands() {
        let (host, visitor) = demo_hands();
        assert_eq!(host.len(), 8);
        assert_eq!(visitor.len(), 8);

        // Rock: top 3, bottom 2, left 5, right 1
        let rock = &host[0];
        assert_eq!(rock.value(Direction::North), 3);
        assert_eq!(rock.value(Direction::South), 2);
        assert_eq!(rock.value(Direction::West), 5);
        assert_eq!(rock.value(Direction::East), 1);
    }

    #[test]
    fn test_random_hands_are_reproducible() {
        let library = CardLibrary::standard();
        let a = random_hands(&library, 8, &mut StdRng::seed_from_u64(3));
        let b = random_hands(&library, 8, &mut StdRng::seed_from_u64(3));

        let names = |cards: &[Card]| cards.iter().map(|c| c.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&a.0), names(&b.0));
        assert_eq!(names(&a.1), names(&b.1));
        assert_eq!(a.0.len(), 8);
        assert!(a.0.iter().all(|c| c.id().raw() < VISITOR_ID_BASE));
        assert!(a.1.iter().all(|c| c.id().raw() > VISITOR_ID_BASE));
    }

    #[test]
    fn test_random_hands_from_empty_library() {
        let (host, visitor) = random_hands(&CardLibrary::new(), 8, &mut StdRng::seed_from_u64(0));
        assert!(host.is_empty());
        assert!(visitor.is_empty());
    }
}
