#![cfg(feature = "serde")]

use genfit::{
    evolution::{EvolutionOptions, LogLevel},
    gene::{CharacterBounds, PolygonGene, TextGene},
    genome::Genome,
    population::Candidate,
};

#[test]
fn test_options_snapshot() {
    let options = EvolutionOptions::builder()
        .population_size(16)
        .genome_size(64)
        .mutation_power(0.25)
        .max_generations(None)
        .seed(11)
        .log_level(LogLevel::Minimal)
        .build();

    let json = serde_json::to_string(&options).unwrap();
    let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, options);
    assert_eq!(restored.get_max_generations(), None);
}

#[test]
fn test_candidate_snapshot() {
    let candidate = Candidate::new(
        Genome::from_genes(vec![
            PolygonGene {
                x: 0.125,
                y: 0.25,
                radius: 0.375,
                angle: 0.5,
                red: 1,
                green: 2,
                blue: 3,
            };
            2
        ]),
        4.5,
    );

    let value = serde_json::to_value(&candidate).unwrap();
    assert_eq!(value["score"], 4.5);

    let restored: Candidate<PolygonGene> = serde_json::from_value(value).unwrap();
    assert_eq!(restored, candidate);
}

#[test]
fn test_text_genome_snapshot() {
    let genome: Genome<TextGene> = Genome::from_text("snap");
    let json = serde_json::to_string(&genome).unwrap();
    let restored: Genome<TextGene> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.to_string(), "snap");
}

#[test]
fn test_character_bounds_are_validated_on_load() {
    let bounds = CharacterBounds::new('a', 'z', 2).unwrap();
    let json = serde_json::to_string(&bounds).unwrap();
    let restored: CharacterBounds = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bounds);

    let inverted = serde_json::from_str::<CharacterBounds>(r#"{"lo":"z","hi":"a","max_step":1}"#);
    let err = inverted.unwrap_err();
    assert!(err.to_string().contains("Character range is empty"));
}
