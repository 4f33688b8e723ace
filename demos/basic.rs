//! Basic example: edit element levels, generate, print the record
//!
//! This example demonstrates:
//! - Starting a session from the default configuration
//! - Applying a preset and editing one element
//! - A rejected edit leaving the levels untouched
//! - Generating the split, base stats and enemybase record

use petbase::random::SeededRandom;
use petbase::*;
use std::time::Instant;

fn main() -> Result<(), GenerateError> {
    let config = GeneratorConfig::default();
    let mut session = GeneratorSession::new(&config);

    // Start from the fire/water preset
    if let Some(preset) = find_preset("fire7-water3") {
        session.apply_preset(preset)?;
    }
    println!("Preset levels:  {}", session.levels());

    // Raise water; fire gives up the overflow
    session.edit_element(Element::Water, 6)?;
    println!("After edit:     {}", session.levels());

    // Earth is opposed to fire, so this is rejected
    if session.edit_element(Element::Earth, 2).is_err() {
        if let Some(notice) = session.notice(Instant::now()) {
            println!("Rejected:       {}", notice.message);
        }
    }
    println!("Levels kept:    {}", session.levels());

    let mut request = GenerationRequest::from_config(&config);
    request.name = "Tidefang".to_string();
    request.temp_id = "7001".to_string();
    request.concept = Concept::AttackDefense;
    request.capture_difficulty = 6;

    let mut rng = SeededRandom::new(7);
    let result = session.generate(&request, &mut rng)?;

    println!("\n=== Generated ===");
    println!("Stat split:  {}", result.split);
    println!("Base stats:  {}", result.base_stats);
    println!("Elements:    {}", result.elements);
    println!("\nRecord:\n{}", result.record);

    Ok(())
}
