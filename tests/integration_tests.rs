use anyhow::Result;
use prompt_describe::utils::error::{ErrorCategory, ErrorSeverity};
use prompt_describe::{CliConfig, DescribeEngine, LineSink, LineSource, SimplePipeline};
use tempfile::TempDir;

async fn run_describe(contents: &str) -> Result<(String, String)> {
    let temp_dir = TempDir::new()?;

    let input_path = temp_dir.path().join("element.txt");
    std::fs::write(&input_path, contents)?;
    let input_path = input_path.to_str().unwrap().to_string();

    let output_path = temp_dir
        .path()
        .join("result.txt")
        .to_str()
        .unwrap()
        .to_string();

    let config = CliConfig {
        input: Some(input_path.clone()),
        output: Some(output_path.clone()),
        verbose: false,
    };

    let source = LineSource::file(input_path);
    let sink = LineSink::file(output_path.clone());
    let pipeline = SimplePipeline::new(source, sink, config);
    let engine = DescribeEngine::new(pipeline);

    let description = engine.run().await?;
    let written = std::fs::read_to_string(&output_path)?;

    Ok((description, written))
}

#[tokio::test]
async fn test_end_to_end_known_element() -> Result<()> {
    let (description, written) =
        run_describe("Contexto detalhado com informacoes importantes\n").await?;

    assert_eq!(
        description,
        "Apresenta o cenario, o usuario e limites para a tarefa"
    );
    assert_eq!(
        written,
        "Apresenta o cenario, o usuario e limites para a tarefa\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_unknown_element() -> Result<()> {
    let (description, written) = run_describe("Instrucao negativa dizendo o que evitar\n").await?;

    assert_eq!(description, "Tecnica desconhecida");
    assert_eq!(written, "Tecnica desconhecida\n");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_whitespace_padded_element() -> Result<()> {
    let (description, _) =
        run_describe("   Exemplos no prompt para mostrar o formato da resposta   \n").await?;

    assert_eq!(description, "Mostra modelos de entrada e saida como referencia");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_input() -> Result<()> {
    let (description, written) = run_describe("").await?;

    assert_eq!(description, "Tecnica desconhecida");
    assert_eq!(written, "Tecnica desconhecida\n");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing_path = temp_dir
        .path()
        .join("does_not_exist.txt")
        .to_str()
        .unwrap()
        .to_string();

    let config = CliConfig {
        input: Some(missing_path.clone()),
        output: None,
        verbose: false,
    };

    let source = LineSource::file(missing_path);
    let sink = LineSink::stdout();
    let pipeline = SimplePipeline::new(source, sink, config);
    let engine = DescribeEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Io);
    assert_eq!(err.severity(), ErrorSeverity::High);
}
