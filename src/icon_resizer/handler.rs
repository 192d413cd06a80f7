//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconResizer` 只负责流程编排与配置持有，不关心具体脚本变体。
//! 批处理链路固定为：
//! 1. 前置检查：源图不存在则整批失败，不触碰文件系统
//! 2. 加载源图（仅一次）
//! 3. 逐条目变换并写盘，单条失败只记录、不中断
//! 4. 汇总为 `BatchReport`
//!
//! ## 实现思路
//!
//! - 配置在构造时固定，整批使用同一份参数。
//! - 条目之间没有依赖；开启 `parallel` 时交给 rayon，结果仍按尺寸表顺序收集。
//! - 记录 `load/render/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use super::source::{BatchReport, EntryOutcome, SourceImage};
use super::table::IconEntry;
use super::{ExistingFilePolicy, IconError, IconSizeTable, ModePolicy, ResizeConfig};

/// 批量图标生成器。
pub struct IconResizer {
    pub(super) config: ResizeConfig,
}

impl IconResizer {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// 生成单个图标：变换 → 补齐父目录 → 写入 PNG，返回写入字节数。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use app_icon_resizer::icon_resizer::{IconResizer, ModePolicy, ResizeConfig};
    /// use std::path::Path;
    ///
    /// let resizer = IconResizer::new(ResizeConfig::default());
    /// let source = resizer.load_source(Path::new("logo.png"))?;
    /// resizer.render_icon(&source, Path::new("out/icon-48.png"), 48, ModePolicy::FlattenOpaque)?;
    /// # Ok::<(), app_icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn render_icon(
        &self,
        source: &SourceImage,
        output_path: &Path,
        size: u32,
        policy: ModePolicy,
    ) -> Result<u64, IconError> {
        let icon = self.transform(source, size, policy)?;
        self.write_icon(&icon, output_path)
    }

    /// 批处理主入口。
    ///
    /// 仅当源图不存在时返回 `Err(IconError::SourceMissing)`；
    /// 其余失败（包括源图无法解码）都记录在报告的对应条目上。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use app_icon_resizer::icon_resizer::{IconResizer, IconSizeTable, ModePolicy, ResizeConfig};
    /// use std::path::Path;
    ///
    /// let resizer = IconResizer::new(ResizeConfig::default());
    /// let report = resizer.run_batch(
    ///     Path::new("assets/images/logo.png"),
    ///     &IconSizeTable::android_launcher(),
    ///     ModePolicy::FlattenOpaque,
    /// )?;
    /// println!("written={} failed={}", report.written(), report.failed());
    /// # Ok::<(), app_icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn run_batch(
        &self,
        source_path: &Path,
        table: &IconSizeTable,
        policy: ModePolicy,
    ) -> Result<BatchReport, IconError> {
        Self::ensure_source_exists(source_path)?;

        let total_start = Instant::now();

        let load_start = Instant::now();
        let loaded = self.load_source(source_path);
        let load_elapsed = load_start.elapsed();

        let render_start = Instant::now();
        let outcomes = match loaded {
            Ok(source) => self.render_all(&source, table, policy),
            Err(err) => {
                log::error!("❌ 源图加载失败，所有条目记为失败：{}", err);
                table
                    .entries()
                    .iter()
                    .map(|entry| EntryOutcome::failed(entry.path.clone(), entry.size, &err))
                    .collect()
            }
        };
        let render_elapsed = render_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 批处理完成 - 策略: {} 条目: {} load={}ms render={}ms total={}ms",
            policy.as_str(),
            outcomes.len(),
            load_elapsed.as_millis(),
            render_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(BatchReport {
            source: source_path.to_path_buf(),
            policy,
            outcomes,
            elapsed_ms: total_elapsed.as_millis() as u64,
        })
    }

    fn render_all(
        &self,
        source: &SourceImage,
        table: &IconSizeTable,
        policy: ModePolicy,
    ) -> Vec<EntryOutcome> {
        if self.config.parallel {
            log::debug!("🧵 并行渲染 {} 个条目", table.len());
            table
                .entries()
                .par_iter()
                .map(|entry| self.render_entry(source, entry, policy))
                .collect()
        } else {
            table
                .entries()
                .iter()
                .map(|entry| self.render_entry(source, entry, policy))
                .collect()
        }
    }

    fn render_entry(&self, source: &SourceImage, entry: &IconEntry, policy: ModePolicy) -> EntryOutcome {
        if self.config.existing_files == ExistingFilePolicy::Skip && entry.path.exists() {
            log::info!("⏭️ 已存在，跳过: {}", entry.path.display());
            return EntryOutcome::Skipped {
                path: entry.path.clone(),
                size: entry.size,
            };
        }

        match self.render_icon(source, &entry.path, entry.size, policy) {
            Ok(bytes) => {
                log::info!("✅ 已生成: {} ({}x{})", entry.path.display(), entry.size, entry.size);
                EntryOutcome::Written {
                    path: entry.path.clone(),
                    size: entry.size,
                    bytes,
                }
            }
            Err(err) => {
                log::error!(
                    "❌ 生成 {} 失败（{}x{}）：{}",
                    entry.path.display(),
                    entry.size,
                    entry.size,
                    err
                );
                EntryOutcome::failed(entry.path.clone(), entry.size, &err)
            }
        }
    }
}
