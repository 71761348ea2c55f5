use curtain::{EffectsConfig, HostCaps, Millis, PageDoc, ScrollSnapshot, Stage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/page_doc.json");
    let doc: PageDoc = serde_json::from_str(s)?;

    let caps = HostCaps {
        reduced_motion: false,
        intersection_observer: true,
    };
    let mut stage = Stage::new(EffectsConfig::default(), doc, caps)?;

    let ops = stage.on_load(&ScrollSnapshot::default(), Millis(0));
    println!("load: {}", serde_json::to_string_pretty(&ops)?);

    stage.on_scroll(
        &ScrollSnapshot {
            y: 120.0,
            ..ScrollSnapshot::default()
        },
        Millis(100),
    );

    for t in [16u64, 100, 416, 960, 1456] {
        let ops = stage.frame(Millis(t));
        println!("frame {t}: {} ops", ops.len());
        for op in &ops {
            println!("  {}", serde_json::to_string(op)?);
        }
    }

    Ok(())
}
