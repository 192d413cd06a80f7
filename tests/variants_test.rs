// 端到端：按各变体的硬编码尺寸表在临时目录中生成全部图标
use app_icon_resizer::cli::{Args, execute};
use app_icon_resizer::error::AppError;
use app_icon_resizer::icon_resizer::{IconError, ModePolicy};
use app_icon_resizer::variants::Variant;
use clap::Parser;
use image::{DynamicImage, ImageBuffer, Rgba};
use std::path::Path;

fn place_source(root: &Path, variant: Variant) {
    let path = root.join(variant.spec().source);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();

    let img = ImageBuffer::from_fn(96, 64, |x, y| {
        let alpha = if (x + y) % 7 == 0 { 0 } else { 255 };
        Rgba([(x * 2) as u8, (y * 3) as u8, 200u8, alpha])
    });
    DynamicImage::ImageRgba8(img).save(&path).unwrap();
}

fn args(root: &Path, extra: &[&str]) -> Args {
    let root = root.to_str().unwrap();
    let mut argv = vec!["icons", "--root", root];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn every_variant_writes_its_whole_table() {
    for variant in [Variant::LauncherIcon, Variant::AppIcons, Variant::LogoResize] {
        let dir = tempfile::tempdir().unwrap();
        place_source(dir.path(), variant);

        let report = execute(variant, &args(dir.path(), &["--parallel"])).unwrap();
        let spec = variant.spec();

        assert_eq!(report.failed(), 0, "{:?}", variant);
        assert_eq!(report.outcomes.len(), spec.table.len());

        for entry in spec.table.entries() {
            let img = image::open(dir.path().join(&entry.path)).unwrap();
            assert_eq!((img.width(), img.height()), (entry.size, entry.size));
        }
    }
}

#[test]
fn launcher_icons_have_no_alpha() {
    let dir = tempfile::tempdir().unwrap();
    place_source(dir.path(), Variant::LauncherIcon);

    execute(Variant::LauncherIcon, &args(dir.path(), &[])).unwrap();

    let icon = image::open(
        dir.path()
            .join("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png"),
    )
    .unwrap();
    assert!(!icon.color().has_alpha());
}

#[test]
fn missing_source_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();

    let result = execute(Variant::AppIcons, &args(dir.path(), &[]));

    assert!(matches!(result, Err(AppError::Icon(IconError::SourceMissing(_)))));
    assert!(!dir.path().join("android").exists());
    assert!(!dir.path().join("ios").exists());
}

#[test]
fn report_lists_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    place_source(dir.path(), Variant::LogoResize);
    let report_path = dir.path().join("reports/icons.json");

    execute(
        Variant::LogoResize,
        &args(dir.path(), &["--report", report_path.to_str().unwrap()]),
    )
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&report_path).unwrap()).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 25);
    assert!(outcomes.iter().all(|o| o["status"] == "written"));
    assert_eq!(json["policy"], "direct_stretch");
}

#[test]
fn policy_flag_overrides_variant_policy() {
    let dir = tempfile::tempdir().unwrap();
    place_source(dir.path(), Variant::LogoResize);

    let report = execute(
        Variant::LogoResize,
        &args(dir.path(), &["--policy", "flatten"]),
    )
    .unwrap();

    assert_eq!(report.policy, ModePolicy::FlattenOpaque);
    let favicon = image::open(dir.path().join("web/favicon.png")).unwrap();
    assert!(!favicon.color().has_alpha());
}
