use jsoneq_benches::available_corpora;
use jsoneq_core::{ComparisonMode, RenderConfig};

#[test]
fn jsoneq_benches_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let corpus =
        available_corpora().iter().find(|c| c.name() == "long-array").expect("registered corpus");
    let dataset = corpus.load()?;
    assert!(dataset.compare(ComparisonMode::Subtree)?.is_none());

    let diff = dataset.compare(ComparisonMode::Equivalence)?.expect("lengths differ");
    let rendered = dataset.render(&diff, ComparisonMode::Equivalence, &RenderConfig::default());
    println!("{rendered}");
    assert!(rendered.starts_with("JSON document has 1000 elements instead of 334 at $."));
    Ok(())
}
