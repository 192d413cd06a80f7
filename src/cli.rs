//! # 命令行层
//!
//! ## 设计思路
//!
//! 三个二进制共用这一层，只做参数解析、日志初始化与结果输出，不承载批处理逻辑。
//! 不带任何参数运行时，行为完全由变体的硬编码值决定；所有参数都只是覆盖项。
//!
//! ## 退出状态
//!
//! - 源图缺失：打印补救提示，返回失败
//! - 其余情况：打印汇总后返回成功，即使有单个条目失败

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use crate::error::AppError;
use crate::icon_resizer::{
    BatchReport, EntryOutcome, ExistingFilePolicy, IconError, IconResizer, ModePolicy,
    ResizeConfig, parse_hex_color,
};
use crate::variants::{MIN_SOURCE_DIMENSION, Variant, VariantSpec};

#[derive(Debug, Parser)]
#[command(about = "将应用 logo 批量缩放为启动图标、应用图标与 Web 图标")]
pub struct Args {
    /// 使用指定源图替代内置路径。
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// 图标输出路径的根目录。
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// 在全部 CPU 核心上并行渲染。
    #[arg(long)]
    pub parallel: bool,

    /// 保留已存在的图标，不覆盖。
    #[arg(long)]
    pub skip_existing: bool,

    /// 覆盖变体内置的变换策略（flatten / padded / stretch）。
    #[arg(long, value_name = "POLICY", value_parser = parse_policy)]
    pub policy: Option<ModePolicy>,

    /// 铺底时使用的背景色。
    #[arg(long, value_name = "RRGGBB", value_parser = parse_background)]
    pub background: Option<[u8; 3]>,

    /// 将每个条目的结果写入 JSON 报告。
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// 输出 debug 日志。
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_background(value: &str) -> Result<[u8; 3], String> {
    parse_hex_color(value).map_err(String::from)
}

fn parse_policy(value: &str) -> Result<ModePolicy, String> {
    ModePolicy::from_str(value).map_err(String::from)
}

impl Args {
    pub fn resize_config(&self) -> ResizeConfig {
        let mut config = ResizeConfig {
            parallel: self.parallel,
            min_recommended_dimension: MIN_SOURCE_DIMENSION,
            ..ResizeConfig::default()
        };
        if self.skip_existing {
            config.existing_files = ExistingFilePolicy::Skip;
        }
        if let Some(background) = self.background {
            config.flatten_background = background;
        }
        config
    }

    fn source_path(&self, spec: &VariantSpec) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| self.root.join(&spec.source))
    }
}

/// 二进制入口：解析参数、初始化日志并执行变体。
pub fn run(variant: Variant) -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match execute(variant, &args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// 执行单个变体的完整批处理，并输出提示与汇总。
pub fn execute(variant: Variant, args: &Args) -> Result<BatchReport, AppError> {
    let spec = variant.spec();
    let source = args.source_path(&spec);
    let table = spec.table.rooted_at(&args.root);
    let policy = args.policy.unwrap_or(spec.policy);

    println!("🎨 [{}] 源图: {} 策略: {}", spec.name, source.display(), policy.as_str());

    let resizer = IconResizer::new(args.resize_config());
    let report = match resizer.run_batch(&source, &table, policy) {
        Ok(report) => report,
        Err(err @ IconError::SourceMissing(_)) => {
            print_guidance(&spec, &source);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    print_summary(&spec, &report);

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        log::info!("📝 报告已写入: {}", path.display());
    }

    Ok(report)
}

fn print_guidance(spec: &VariantSpec, source: &Path) {
    eprintln!("❌ 未找到源图: {}", source.display());
    eprintln!();
    for line in spec.guidance(source) {
        eprintln!("{line}");
    }
}

fn print_summary(spec: &VariantSpec, report: &BatchReport) {
    println!();
    println!(
        "🎉 图标生成完成：成功 {} / 跳过 {} / 失败 {}（共 {}，{}ms）",
        report.written(),
        report.skipped(),
        report.failed(),
        report.outcomes.len(),
        report.elapsed_ms
    );

    for outcome in report.failures() {
        if let EntryOutcome::Failed { path, size, error, .. } = outcome {
            println!("   ❌ {} ({size}x{size}): {error}", path.display());
        }
    }

    if !spec.next_steps.is_empty() {
        println!("📦 后续步骤:");
        for step in &spec.next_steps {
            println!("{step}");
        }
    }
}

fn write_report(path: &Path, report: &BatchReport) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_hardcoded_behaviour() {
        let args = Args::try_parse_from(["create-launcher-icon"]).unwrap();
        let spec = Variant::LauncherIcon.spec();

        assert_eq!(args.source_path(&spec), PathBuf::from(".").join(&spec.source));
        let config = args.resize_config();
        assert_eq!(config.existing_files, ExistingFilePolicy::Overwrite);
        assert_eq!(config.flatten_background, [255, 255, 255]);
        assert!(!config.parallel);
        assert_eq!(args.policy, None);
    }

    #[test]
    fn policy_flag_parses_and_rejects_unknown() {
        let args = Args::try_parse_from(["resize-logo", "--policy", "Padded"]).unwrap();
        assert_eq!(args.policy, Some(ModePolicy::PaddedTransparent));

        assert!(Args::try_parse_from(["resize-logo", "--policy", "letterbox"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "generate-app-icons",
            "--parallel",
            "--skip-existing",
            "--background",
            "#102030",
            "--source",
            "/tmp/logo.png",
        ])
        .unwrap();

        let config = args.resize_config();
        assert!(config.parallel);
        assert_eq!(config.existing_files, ExistingFilePolicy::Skip);
        assert_eq!(config.flatten_background, [0x10, 0x20, 0x30]);
        assert_eq!(
            args.source_path(&Variant::AppIcons.spec()),
            PathBuf::from("/tmp/logo.png")
        );
    }

    #[test]
    fn missing_override_source_is_reported_by_its_own_path() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("brand/logo.png");
        let args = Args::try_parse_from([
            "generate-app-icons",
            "--root",
            dir.path().to_str().unwrap(),
            "--source",
            custom.to_str().unwrap(),
        ])
        .unwrap();
        let spec = Variant::AppIcons.spec();

        let source = args.source_path(&spec);
        assert_eq!(source, custom);
        let guidance = spec.guidance(&source);
        assert!(guidance.iter().any(|line| line.contains(&custom.display().to_string())));

        let result = execute(Variant::AppIcons, &args);
        assert!(matches!(result, Err(AppError::Icon(IconError::SourceMissing(_)))));
    }

    #[test]
    fn rejects_bad_background() {
        assert!(Args::try_parse_from(["resize-logo", "--background", "white"]).is_err());
    }
}
