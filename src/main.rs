use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use shmin_transformer::{transform, TransformOption};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Usage: shmin <path_to_shader> [config.json]")]
    Usage,
    #[error("Error: File not found [{0}]")]
    FileNotFound(String),
    #[error("An error occurred: {0:#}")]
    Transform(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Transform(_) => 1,
            CliError::Usage => 2,
            CliError::FileNotFound(_) => 3,
        }
    }
}

fn init_log() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("LOG"))
        .init();
}

fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CliError::FileNotFound(path.to_string()),
        _ => CliError::Transform(anyhow::Error::new(err).context(format!("failed to read {path}"))),
    })
}

fn read_options(path: Option<&String>) -> Result<TransformOption, CliError> {
    let Some(path) = path else {
        return Ok(TransformOption::default());
    };

    let content = read_file(path)?;
    let options = serde_json::from_str(&content)
        .map_err(|err| anyhow::Error::new(err).context(format!("invalid config {path}")))?;

    Ok(options)
}

fn run(args: &[String]) -> Result<String, CliError> {
    let (shader, config) = match args {
        [shader] => (shader, None),
        [shader, config] => (shader, Some(config)),
        _ => return Err(CliError::Usage),
    };

    let options = read_options(config)?;
    let content = read_file(shader)?;

    debug!(path = %Path::new(shader).display(), bytes = content.len(), "minifying");

    Ok(transform(content, options)?.content)
}

fn main() -> ExitCode {
    init_log();

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match run(&args) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn temp_file(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("shmin-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn usage() {
        let err = run(&args(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Usage: shmin <path_to_shader> [config.json]");

        let err = run(&args(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(err, CliError::Usage));
    }

    #[test]
    fn file_not_found() {
        let err = run(&args(&["/definitely/not/here.glsl"])).unwrap_err();

        assert_eq!(err.to_string(), "Error: File not found [/definitely/not/here.glsl]");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn minifies_file() {
        let shader = temp_file("main.frag", "#version 330 core\n// entry\nvoid main() {\n  float value = 1.0;\n}\n");

        assert_eq!(
            run(&args(&[shader.as_str()])).unwrap(),
            "#version 330 core\\nvoid main(){float a=1.0;}"
        );
    }

    #[test]
    fn applies_config() {
        let shader = temp_file("config.frag", "void main() {\n  float value = 1.0;\n}\n");
        let config = temp_file("config.json", r#"{ "rename": false }"#);

        assert_eq!(
            run(&args(&[shader.as_str(), config.as_str()])).unwrap(),
            "void main(){float value=1.0;}"
        );
    }

    #[test]
    fn invalid_config() {
        let shader = temp_file("invalid.frag", "void main() {}");
        let config = temp_file("invalid.json", "{ not json");

        let err = run(&args(&[shader.as_str(), config.as_str()])).unwrap_err();

        assert!(err.to_string().starts_with("An error occurred: invalid config"));
        assert_eq!(err.exit_code(), 1);
    }
}
