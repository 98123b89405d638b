use std::collections::HashSet;

use bintree::application::services::{rng_from_seed, RandomTreeGenerator, TreeService};
use bintree::config::GeneratorSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(42)]
#[case(2024)]
fn given_fixed_seed_when_generating_twice_then_same_tree(#[case] seed: u64) {
    let generator = RandomTreeGenerator::default();

    let first = generator.generate(&mut rng_from_seed(Some(seed)));
    let second = generator.generate(&mut StdRng::seed_from_u64(seed));

    assert_eq!(first.pre_order(), second.pre_order());
}

#[test]
fn given_settings_when_building_generator_then_values_follow_range() {
    let settings = GeneratorSettings {
        count: 15,
        max_value: 100,
        seed: Some(8),
    };
    let generator = RandomTreeGenerator::from_settings(&settings).unwrap();

    let values = generator.generate_values(&mut rng_from_seed(settings.seed));

    assert_eq!(values.len(), 15);
    assert!(values.iter().all(|v| (0..=100).contains(v)));
    assert_eq!(values.iter().collect::<HashSet<_>>().len(), 15);
}

#[test]
fn given_generated_tree_when_checked_then_structure_valid_and_balanced() {
    let generator = RandomTreeGenerator::default();
    let mut rng = rng_from_seed(Some(11));

    for _ in 0..20 {
        let tree = generator.generate(&mut rng);
        assert!(tree.validate_structure());
        assert!(tree.is_height_balanced());
        assert_eq!(tree.size(), Ok(30));
    }
}

#[test]
fn given_service_when_regenerating_repeatedly_then_size_stays_capped() {
    let mut service = TreeService::new();
    let generator = RandomTreeGenerator::new(40, 9).unwrap();
    let mut rng = rng_from_seed(Some(3));

    assert_eq!(service.regenerate(&generator, &mut rng), 10);
    assert_eq!(service.regenerate(&generator, &mut rng), 10);
}
