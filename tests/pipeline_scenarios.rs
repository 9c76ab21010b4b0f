//! Integration tests for paragraph stemming behavior.

use stemline::analysis::stem::LatinAlgorithm;
use stemline::error::Result;
use stemline::pipeline::*;

fn default_pipeline() -> Result<StemmingPipeline> {
    StemmingPipeline::from_config(&PipelineConfig::default())
}

fn english_pipeline() -> Result<StemmingPipeline> {
    StemmingPipeline::from_config(
        &PipelineConfig::default().with_latin_algorithm(LatinAlgorithm::English),
    )
}

#[test]
fn test_reference_scenario() -> Result<()> {
    let pipeline = default_pipeline()?;
    let response = pipeline.process(&StemmingRequest::new(["5 кошек бежали по-домам"]))?;

    assert_eq!(
        response.stems,
        vec![vec!["5", "кошка", "бежать", "по", "дом"]]
    );
    assert!(response.errors.is_empty());

    Ok(())
}

#[test]
fn test_one_result_per_paragraph_in_order() -> Result<()> {
    let pipeline = default_pipeline()?;
    let paragraphs = vec![
        "кошек".to_string(),
        String::new(),
        "и в на".to_string(),
        "2024".to_string(),
        "домам".to_string(),
    ];
    let stems = pipeline.run(&paragraphs)?;

    assert_eq!(stems.len(), paragraphs.len());
    assert_eq!(stems[0], vec!["кошка"]);
    assert!(stems[1].is_empty());
    assert!(stems[2].is_empty());
    assert_eq!(stems[3], vec!["2024"]);
    assert_eq!(stems[4], vec!["дом"]);

    Ok(())
}

#[test]
fn test_empty_batch() -> Result<()> {
    let pipeline = default_pipeline()?;
    let empty: Vec<String> = Vec::new();
    assert!(pipeline.run(&empty)?.is_empty());
    assert!(pipeline.process(&StemmingRequest::default())?.stems.is_empty());
    Ok(())
}

#[test]
fn test_deterministic() -> Result<()> {
    let pipeline = english_pipeline()?;
    let paragraphs: Vec<String> = (0..200)
        .map(|i| format!("{i} Кошки читали книги, hello-world т.д. стали"))
        .collect();

    let first = pipeline.run(&paragraphs)?;
    let second = pipeline.run(&paragraphs)?;
    let sequential = pipeline.clone().parallel(false).run(&paragraphs)?;

    assert_eq!(first, second);
    assert_eq!(first, sequential);
    Ok(())
}

#[test]
fn test_numbers_and_abbreviations_are_verbatim() -> Result<()> {
    let pipeline = default_pipeline()?;

    assert_eq!(pipeline.stem_paragraph("3,14 2.5 100")?, vec!["3,14", "2.5", "100"]);
    assert_eq!(pipeline.stem_paragraph("т.д. т.п.")?, vec!["т.д.", "т.п."]);
    // Abbreviations are lowercased but not otherwise changed.
    assert_eq!(pipeline.stem_paragraph("США.Н.Э")?, vec!["сша.н.э"]);

    Ok(())
}

#[test]
fn test_whole_token_stop_words() -> Result<()> {
    let pipeline = default_pipeline()?;

    assert!(pipeline.stem_paragraph("и в на по не")?.is_empty());
    // Stop words inside a hyphenated token are stemmed as fragments.
    assert_eq!(pipeline.stem_paragraph("по-домам")?, vec!["по", "дом"]);

    Ok(())
}

#[test]
fn test_separators() -> Result<()> {
    let pipeline = english_pipeline()?;

    assert_eq!(
        pipeline.stem_paragraph("cats\\dogs\t\n  birds")?,
        vec!["cat", "dog", "bird"]
    );
    assert!(pipeline.stem_paragraph("   \t\\\\  ")?.is_empty());
    assert_eq!(pipeline.stem_paragraph("hello-world")?, vec!["hello", "world"]);

    Ok(())
}

#[test]
fn test_punctuation_only_tokens_are_dropped() -> Result<()> {
    let pipeline = default_pipeline()?;
    assert_eq!(pipeline.stem_paragraph("кошек — «» !?")?, vec!["кошка"]);
    Ok(())
}

#[test]
fn test_first_parse_wins() -> Result<()> {
    let pipeline = default_pipeline()?;
    // "стали" is both a verb form and a noun form; the better ranked wins.
    assert_eq!(pipeline.stem_paragraph("стали")?, vec!["стать"]);
    Ok(())
}

#[test]
fn test_default_latin_algorithm_is_russian() -> Result<()> {
    // The Russian Snowball algorithm leaves Latin words alone.
    let pipeline = default_pipeline()?;
    assert_eq!(pipeline.stem_paragraph("running cats")?, vec!["running", "cats"]);
    Ok(())
}

#[test]
fn test_unicode_normalization() -> Result<()> {
    let pipeline = default_pipeline()?;
    let composed = pipeline.stem_paragraph("ёлки")?;
    let decomposed = pipeline.stem_paragraph("е\u{0308}лки")?;

    assert_eq!(composed, decomposed);
    assert_eq!(composed, vec!["ёлка"]);
    // The plain "е" spelling keeps its own lemma.
    assert_eq!(pipeline.stem_paragraph("елки")?, vec!["елка"]);
    Ok(())
}

#[test]
fn test_response_json_shape() -> Result<()> {
    let pipeline = default_pipeline()?;
    let request: StemmingRequest =
        serde_json::from_str(r#"{"paragraphs": ["5 кошек бежали по-домам"]}"#)?;
    let response = pipeline.process(&request)?;

    assert_eq!(
        serde_json::to_string(&response)?,
        r#"{"stems":[["5","кошка","бежать","по","дом"]]}"#
    );
    Ok(())
}

#[test]
fn test_malformed_input_policies() -> Result<()> {
    let paragraphs: Vec<Vec<u8>> = vec![b"cats".to_vec(), vec![0xc3, 0x28], "дома".into()];

    let abort = default_pipeline()?;
    let err = abort.process_bytes(&paragraphs).unwrap_err();
    assert_eq!(err.paragraph(), Some(1));

    let isolate = abort.with_failure_policy(FailurePolicy::IsolateParagraph);
    let response = isolate.process_bytes(&paragraphs)?;
    assert_eq!(response.stems[0], vec!["cats"]);
    assert!(response.stems[1].is_empty());
    assert_eq!(response.stems[2], vec!["дом"]);
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].error.contains("paragraph 1"));

    Ok(())
}
