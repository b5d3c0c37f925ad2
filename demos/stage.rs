//! Loads a small cue sheet onto a four-fixture rig and steps through its
//! cues, printing the resulting parameters.
//!
//! Run with `cargo run --example stage`. Log output goes to `stage.log`.

use std::sync::Arc;

use cuecss_rs::{Engine, MemoryTarget, Registry, init_logger};
use log::LevelFilter;

const CUE_SHEET: &str = r#"
    * { pan: 0; tilt: 0; dimmer: .2; color: white; }

    .spot { tilt: 30deg; dimmer: 1; }
    .wash { dimmer: .5; color: yellow; }

    .intro .spot { color: magenta; }
    .intro .left { pan: -45; }

    .intro.blackout * { dimmer: 0; }
"#;

fn main() -> cuecss_rs::Result<()> {
    init_logger("stage.log", LevelFilter::Debug)?;

    let rig = [
        ("spot-l", vec!["spot", "left"]),
        ("spot-r", vec!["spot", "right"]),
        ("wash-l", vec!["wash", "left"]),
        ("wash-r", vec!["wash", "right"]),
    ];

    let mut registry = Registry::new();
    let mut fixtures = Vec::new();
    for (id, labels) in &rig {
        let fixture = Arc::new(MemoryTarget::new());
        registry.add(fixture.clone(), id, labels)?;
        fixtures.push((*id, fixture));
    }

    let mut engine = Engine::with_css(registry, CUE_SHEET)?;

    for cue in ["*", ".intro", ".intro.blackout"] {
        let applied = engine.activate(cue)?;
        println!("{cue} ({} cues, {} settings)", applied.cues, applied.settings);

        for (id, fixture) in &fixtures {
            let params: Vec<String> = fixture
                .snapshot()
                .iter()
                .map(|(property, value)| format!("{property}={value}"))
                .collect();
            println!("  {id:<7} {}", params.join(" "));
        }
    }

    Ok(())
}
