//! Subvox - SRT 字幕转 SSML 语音合成工具
//!
//! 子命令:
//! - convert: SRT -> SSML，可选合成音频
//! - templates: 为音色目录中的每个音色合成样例
//! - voices: 列出音色目录

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use subvox::application::{
    ConvertSubtitle, ConvertSubtitleHandler, GenerateVoiceTemplates,
    GenerateVoiceTemplatesHandler, RetryPolicy, SynthesisStatus, SynthesizeHandler,
    VoiceCatalogPort,
};
use subvox::config::{load_config_from_path, print_config, AppConfig};
use subvox::domain::SsmlOptions;
use subvox::infrastructure::{AzureTtsClient, AzureTtsClientConfig, FileAudioStorage, FileVoiceCatalog};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "subvox")]
#[command(author, version, about = "Convert SRT subtitles to SSML and synthesize speech", long_about = None)]
struct Cli {
    /// 配置文件路径（默认读取当前目录的 settings.toml）
    #[arg(long, short = 'c', global = true, env = "SUBVOX_CONFIG")]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an SRT file to SSML, optionally synthesizing it
    Convert {
        /// SRT subtitle file
        srt_file: PathBuf,

        /// Voice name (defaults to speech.default_voice)
        #[arg(long)]
        voice: Option<String>,

        /// Write SSML to this file instead of stdout
        #[arg(long)]
        ssml_out: Option<PathBuf>,

        /// Synthesize the SSML to a WAV file
        #[arg(long)]
        synthesize: bool,

        /// Audio output directory (defaults to convert.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Audio file name without extension (defaults to convert.file_name)
        #[arg(long)]
        file_name: Option<String>,
    },

    /// Synthesize a sample for every voice in the catalog
    Templates {
        /// Voice catalog file (defaults to template.catalog_path)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Sample output directory (defaults to template.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Sample text (defaults to template.sample_text)
        #[arg(long)]
        text: Option<String>,
    },

    /// List the voices in the catalog
    Voices {
        /// Voice catalog file (defaults to template.catalog_path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 密钥文件 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志，输出到 stderr，stdout 留给 SSML
    let level = if cli.verbose { "debug" } else { config.log.level.as_str() };
    let log_filter = format!("{},subvox={}", level, level);
    let env_filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new(&log_filter)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    match cli.command {
        Command::Convert {
            srt_file,
            voice,
            ssml_out,
            synthesize,
            output_dir,
            file_name,
        } => {
            run_convert(
                &config,
                ConvertArgs {
                    srt_file,
                    voice,
                    ssml_out,
                    synthesize,
                    output_dir,
                    file_name,
                },
            )
            .await
        }
        Command::Templates {
            catalog,
            output_dir,
            text,
        } => run_templates(&config, catalog, output_dir, text).await,
        Command::Voices { catalog } => run_voices(&config, catalog).await,
    }
}

struct ConvertArgs {
    srt_file: PathBuf,
    voice: Option<String>,
    ssml_out: Option<PathBuf>,
    synthesize: bool,
    output_dir: Option<PathBuf>,
    file_name: Option<String>,
}

async fn run_convert(config: &AppConfig, args: ConvertArgs) -> anyhow::Result<()> {
    let srt_text = tokio::fs::read_to_string(&args.srt_file)
        .await
        .with_context(|| format!("Failed to read {:?}", args.srt_file))?;

    let defaults = SsmlOptions::new(config.speech.default_voice.clone())
        .with_language(config.speech.language.clone());
    let mut handler = ConvertSubtitleHandler::new(defaults);

    let synthesize_to = if args.synthesize {
        let output_dir = args.output_dir.unwrap_or_else(|| config.convert.output_dir.clone());
        handler = handler.with_synthesizer(build_synthesizer(config, &output_dir).await?);
        Some(args.file_name.unwrap_or_else(|| config.convert.file_name.clone()))
    } else {
        None
    };

    let response = handler
        .handle(ConvertSubtitle {
            srt_text,
            voice_name: args.voice,
            synthesize_to,
        })
        .await?;

    match &args.ssml_out {
        Some(path) => {
            tokio::fs::write(path, &response.ssml)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("SSML written to {:?}", path);
        }
        None => println!("{}", response.ssml),
    }

    if let Some(report) = response.synthesis {
        match report.status {
            SynthesisStatus::Succeeded { path } => {
                tracing::info!("Audio saved to {:?}", path);
            }
            SynthesisStatus::Exhausted { last_error } => {
                anyhow::bail!(
                    "Synthesis failed after {} attempts: {}",
                    report.attempts,
                    last_error
                );
            }
            SynthesisStatus::Failed { reason } => {
                anyhow::bail!("Synthesis failed: {}", reason);
            }
        }
    }

    Ok(())
}

async fn run_templates(
    config: &AppConfig,
    catalog: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    text: Option<String>,
) -> anyhow::Result<()> {
    let catalog_path = catalog.unwrap_or_else(|| config.template.catalog_path.clone());
    let output_dir = output_dir.unwrap_or_else(|| config.template.output_dir.clone());

    let catalog = Arc::new(FileVoiceCatalog::new(&catalog_path));
    let synthesizer = build_synthesizer(config, &output_dir).await?;
    let handler =
        GenerateVoiceTemplatesHandler::new(catalog, synthesizer, config.speech.language.clone());

    let batch = handler
        .handle(GenerateVoiceTemplates {
            sample_text: text.unwrap_or_else(|| config.template.sample_text.clone()),
            voice_locale: config.speech.voice_locale.clone(),
        })
        .await?;

    for report in batch.reports.iter().filter(|r| !r.is_success()) {
        tracing::warn!("No sample generated for {}", report.voice_name);
    }

    Ok(())
}

async fn run_voices(config: &AppConfig, catalog: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog_path = catalog.unwrap_or_else(|| config.template.catalog_path.clone());
    let catalog = FileVoiceCatalog::new(&catalog_path);

    for voice in catalog.load().await? {
        println!(
            "{}\t{}",
            voice.qualified_name(&config.speech.voice_locale),
            voice.gender()
        );
    }

    Ok(())
}

/// 创建带重试策略的合成处理器
async fn build_synthesizer(config: &AppConfig, output_dir: &Path) -> anyhow::Result<SynthesizeHandler> {
    let mut client_config =
        AzureTtsClientConfig::new(config.subscription_key.clone(), config.service_region.clone())
            .with_timeout(config.speech.timeout_secs);
    client_config.output_format = config.speech.output_format.clone();
    if let Some(endpoint) = &config.speech.endpoint {
        client_config = client_config.with_endpoint(endpoint.clone());
    }
    let client = Arc::new(AzureTtsClient::new(client_config)?);

    let storage = Arc::new(FileAudioStorage::new(output_dir).await?);

    let policy = RetryPolicy::new(config.retry.max_retries, config.retry.retry_delay());

    Ok(SynthesizeHandler::new(client, storage, policy))
}
