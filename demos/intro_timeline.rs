use curtain::{
    EffectsConfig, Hero, HostCaps, Millis, PageDoc, ScrollSnapshot, Stage, TextBlock,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let doc = PageDoc {
        hero: Some(Hero {
            eyebrow: Some(TextBlock::from_text("a small town studio")),
            lines: vec![
                TextBlock::from_text("Making quiet"),
                TextBlock::from_text("things move"),
            ],
            brand: Some(TextBlock::from_text("Curtain")),
        }),
        ..PageDoc::default()
    };

    let caps = HostCaps {
        reduced_motion: false,
        intersection_observer: true,
    };
    let mut stage = Stage::new(EffectsConfig::default(), doc, caps)?;
    stage.on_load(&ScrollSnapshot::default(), Millis(0));

    // 16ms frame loop across the whole entry timeline.
    let mut t = 0u64;
    while t <= 1600 {
        for op in stage.frame(Millis(t)) {
            println!("{t:>5}ms  {}", serde_json::to_string(&op)?);
        }
        t += 16;
    }

    if let Some(hero) = stage.hero()
        && let Some(line) = hero.lines[0].split()
    {
        println!(
            "line 1: {} chars, base {}, stagger {}",
            line.char_count(),
            line.base_css(),
            line.stagger_css()
        );
    }

    Ok(())
}
