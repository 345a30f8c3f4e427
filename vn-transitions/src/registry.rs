//! # Registry 模块
//!
//! 预设注册表：名称 → 过渡描述符的平面映射，以及内置预设脚本。
//!
//! ## 设计原则
//!
//! - **显式对象**：注册表是显式构造、按引用传递的对象，不是进程级全局状态
//! - **后写覆盖**：同名插入静默覆盖旧绑定，这是文档化的策略而非错误
//! - **初始化即定型**：全部构造发生在初始化阶段；之后注册表只读，
//!   可被任意数量的并发读者无锁访问
//!
//! 这是所有内置预设名称与默认参数的**唯一来源**。

use std::collections::{BTreeMap, HashMap};

use crate::descriptor::{CropMoveMode, PunchAxis, TransitionDescriptor};
use crate::easing::TimeWarp;
use crate::error::TransitionResult;
use crate::generator::MoveFamily;

/// 内置预设的默认参数
///
/// 任何需要这些默认值的地方都应使用这些常量，而非硬编码数字。
pub mod defaults {
    /// 移动过渡族（move / ease）时长
    pub const MOVE_FAMILY_DELAY: f32 = 0.5;
    /// Fade 淡出/淡入各阶段时长
    pub const FADE_PHASE: f32 = 0.5;
    /// Dissolve 时长
    pub const DISSOLVE_DURATION: f32 = 0.5;
    /// Pixellate 时长
    pub const PIXELLATE_DURATION: f32 = 1.0;
    /// Pixellate 单向步数
    pub const PIXELLATE_STEPS: u32 = 5;
    /// 裁剪移动（wipe / slide / slideaway / iris）时长
    pub const CROP_MOVE_DURATION: f32 = 1.0;
    /// 缩放过渡时长
    pub const ZOOM_DURATION: f32 = 0.5;
    /// 缩放过渡的最小缩放系数
    pub const ZOOM_NEAR: f32 = 0.01;
    /// 震屏总时长
    pub const PUNCH_DURATION: f32 = 0.275;
    /// 震屏单程耗时
    pub const PUNCH_PERIOD: f32 = 0.10;
    /// 垂直震屏幅度
    pub const VPUNCH_MAGNITUDE: f32 = 10.0;
    /// 水平震屏幅度
    pub const HPUNCH_MAGNITUDE: f32 = 15.0;
    /// 瓦片溶解时长
    pub const IMAGE_DISSOLVE_DURATION: f32 = 1.0;
    /// 百叶窗瓦片图
    pub const BLINDS_TILE: &str = "common/blindstile.png";
    /// 方块瓦片图
    pub const SQUARES_TILE: &str = "common/squarestile.png";
    /// 百叶窗渐变坡长
    pub const BLINDS_RAMP: u32 = 8;
    /// 方块渐变坡长
    pub const SQUARES_RAMP: u32 = 256;
}

/// 预设注册表
///
/// 场景编排代码在显示/隐藏/替换元素时按名称引用描述符。
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    entries: HashMap<String, TransitionDescriptor>,
}

impl PresetRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并填充全部内置预设的注册表
    ///
    /// 任何预设构造失败都使整个初始化失败；失败时不应使用部分状态。
    pub fn with_defaults() -> TransitionResult<Self> {
        let mut registry = Self::new();
        registry.install_defaults()?;
        Ok(registry)
    }

    /// 按名称查找描述符
    pub fn get(&self, name: &str) -> Option<&TransitionDescriptor> {
        self.entries.get(name)
    }

    /// 是否存在某名称
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 绑定数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 插入绑定（后写覆盖）
    pub fn insert(&mut self, name: impl Into<String>, descriptor: TransitionDescriptor) {
        let name = name.into();
        if let Some(previous) = self.entries.insert(name.clone(), descriptor) {
            tracing::debug!(name = %name, previous = ?previous.kind, "覆盖同名过渡绑定");
        }
    }

    /// 生成并安装一个移动过渡族（9 个绑定）
    ///
    /// 先构造全部 9 个描述符，再一次性插入：构造失败不污染注册表。
    /// 同一前缀重复安装会整体替换之前的 9 个绑定。
    pub fn install_move_family(&mut self, family: &MoveFamily) -> TransitionResult<()> {
        let bindings = family.generate()?;
        for (name, descriptor) in bindings {
            self.insert(name, descriptor);
        }
        Ok(())
    }

    /// 按名称排序的视图（用于序列化与工具输出，HashMap 本身无序）
    pub fn sorted_entries(&self) -> BTreeMap<&str, &TransitionDescriptor> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
            .collect()
    }

    /// 按名称排序的全部名称
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 安装全部内置预设
    ///
    /// 两个移动过渡族（`move`、`ease`）加上标准独立预设。
    fn install_defaults(&mut self) -> TransitionResult<()> {
        use defaults::*;

        // ---- 移动过渡族 ----
        self.install_move_family(&MoveFamily::new("move", MOVE_FAMILY_DELAY))?;
        self.install_move_family(
            &MoveFamily::new("ease", MOVE_FAMILY_DELAY).with_warps(
                TimeWarp::EaseInOut,
                TimeWarp::EaseIn,
                TimeWarp::EaseOut,
            ),
        )?;

        // ---- 淡化 ----
        self.insert(
            "fade",
            TransitionDescriptor::fade(FADE_PHASE, 0.0, FADE_PHASE, [0, 0, 0])?,
        );
        self.insert(
            "dissolve",
            TransitionDescriptor::dissolve(DISSOLVE_DURATION, false)?,
        );
        self.insert(
            "pixellate",
            TransitionDescriptor::pixellate(PIXELLATE_DURATION, PIXELLATE_STEPS)?,
        );

        // ---- 裁剪移动 ----
        let crop_modes = [
            ("wiperight", CropMoveMode::WipeRight),
            ("wipeleft", CropMoveMode::WipeLeft),
            ("wipeup", CropMoveMode::WipeUp),
            ("wipedown", CropMoveMode::WipeDown),
            ("slideright", CropMoveMode::SlideRight),
            ("slideleft", CropMoveMode::SlideLeft),
            ("slideup", CropMoveMode::SlideUp),
            ("slidedown", CropMoveMode::SlideDown),
            ("slideawayright", CropMoveMode::SlideAwayRight),
            ("slideawayleft", CropMoveMode::SlideAwayLeft),
            ("slideawayup", CropMoveMode::SlideAwayUp),
            ("slideawaydown", CropMoveMode::SlideAwayDown),
            ("irisin", CropMoveMode::IrisIn),
            ("irisout", CropMoveMode::IrisOut),
        ];
        for (name, mode) in crop_modes {
            self.insert(
                name,
                TransitionDescriptor::crop_move(CROP_MOVE_DURATION, mode)?,
            );
        }

        // ---- 缩放 ----
        self.insert(
            "zoomin",
            TransitionDescriptor::zoom(ZOOM_DURATION, ZOOM_NEAR, 1.0, false)?,
        );
        self.insert(
            "zoomout",
            TransitionDescriptor::zoom(ZOOM_DURATION, 1.0, ZOOM_NEAR, false)?,
        );
        self.insert(
            "zoominout",
            TransitionDescriptor::zoom(ZOOM_DURATION, ZOOM_NEAR, 1.0, true)?,
        );

        // ---- 震屏 ----
        self.insert(
            "vpunch",
            TransitionDescriptor::punch(
                PUNCH_DURATION,
                PunchAxis::Vertical,
                VPUNCH_MAGNITUDE,
                PUNCH_PERIOD,
            )?,
        );
        self.insert(
            "hpunch",
            TransitionDescriptor::punch(
                PUNCH_DURATION,
                PunchAxis::Horizontal,
                HPUNCH_MAGNITUDE,
                PUNCH_PERIOD,
            )?,
        );

        // ---- 瓦片溶解 ----
        self.insert(
            "blinds",
            TransitionDescriptor::image_dissolve(
                IMAGE_DISSOLVE_DURATION,
                BLINDS_TILE,
                BLINDS_RAMP,
                false,
            )?,
        );
        self.insert(
            "squares",
            TransitionDescriptor::image_dissolve(
                IMAGE_DISSOLVE_DURATION,
                SQUARES_TILE,
                SQUARES_RAMP,
                false,
            )?,
        );

        tracing::debug!(count = self.len(), "内置过渡预设安装完成");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TransitionKind;
    use crate::error::ConstructionError;

    // ========== 基本操作 ==========

    #[test]
    fn test_insert_and_get() {
        let mut registry = PresetRegistry::new();
        assert!(registry.is_empty());

        registry.insert(
            "dissolve",
            TransitionDescriptor::dissolve(0.5, false).unwrap(),
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("dissolve"));
        assert_eq!(registry.get("dissolve").unwrap().duration, 0.5);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_insert_overwrites_silently() {
        let mut registry = PresetRegistry::new();
        registry.insert(
            "dissolve",
            TransitionDescriptor::dissolve(0.5, false).unwrap(),
        );
        registry.insert(
            "dissolve",
            TransitionDescriptor::dissolve(2.0, true).unwrap(),
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("dissolve").unwrap().duration, 2.0);
    }

    // ========== 过渡族安装 ==========

    #[test]
    fn test_install_move_family_binds_nine_names() {
        let mut registry = PresetRegistry::new();
        registry
            .install_move_family(&MoveFamily::new("move", 0.5))
            .unwrap();

        assert_eq!(registry.len(), 9);
        for name in [
            "move",
            "moveinright",
            "moveinleft",
            "moveintop",
            "moveinbottom",
            "moveoutright",
            "moveoutleft",
            "moveouttop",
            "moveoutbottom",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_reinstall_replaces_all_nine_bindings() {
        let mut registry = PresetRegistry::new();
        registry
            .install_move_family(&MoveFamily::new("move", 0.5))
            .unwrap();
        registry
            .install_move_family(
                &MoveFamily::new("move", 1.5).with_warps(
                    TimeWarp::EaseInOut,
                    TimeWarp::EaseIn,
                    TimeWarp::EaseOut,
                ),
            )
            .unwrap();

        assert_eq!(registry.len(), 9);
        // 查询只能看到第二次安装的参数
        for name in registry.names() {
            let desc = registry.get(name).unwrap();
            assert_eq!(desc.duration, 1.5, "{name} not replaced");
            let TransitionKind::Move { time_warp, .. } = &desc.kind else {
                panic!("expected Move");
            };
            assert_eq!(*time_warp, TimeWarp::EaseInOut);
        }
    }

    #[test]
    fn test_failed_install_leaves_registry_untouched() {
        let mut registry = PresetRegistry::new();
        registry.insert(
            "dissolve",
            TransitionDescriptor::dissolve(0.5, false).unwrap(),
        );

        // delay 为 0 非法：原子失败，不产生部分绑定
        let result = registry.install_move_family(&MoveFamily::new("move", 0.0));
        assert_eq!(
            result,
            Err(ConstructionError::InvalidDuration { value: 0.0 })
        );
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("move"));
        assert!(!registry.contains("moveinright"));
    }

    // ========== 内置预设 ==========

    #[test]
    fn test_defaults_contain_all_standard_names() {
        let registry = PresetRegistry::with_defaults().unwrap();

        let expected = [
            // move / ease 族（各 9 个）
            "move",
            "moveinright",
            "moveinleft",
            "moveintop",
            "moveinbottom",
            "moveoutright",
            "moveoutleft",
            "moveouttop",
            "moveoutbottom",
            "ease",
            "easeinright",
            "easeinleft",
            "easeintop",
            "easeinbottom",
            "easeoutright",
            "easeoutleft",
            "easeouttop",
            "easeoutbottom",
            // 独立预设
            "fade",
            "dissolve",
            "pixellate",
            "wiperight",
            "wipeleft",
            "wipeup",
            "wipedown",
            "slideright",
            "slideleft",
            "slideup",
            "slidedown",
            "slideawayright",
            "slideawayleft",
            "slideawayup",
            "slideawaydown",
            "irisin",
            "irisout",
            "zoomin",
            "zoomout",
            "zoominout",
            "vpunch",
            "hpunch",
            "blinds",
            "squares",
        ];

        for name in expected {
            assert!(registry.contains(name), "missing preset {name}");
        }
        assert_eq!(registry.len(), expected.len());
    }

    #[test]
    fn test_default_fade_and_dissolve_parameters() {
        let registry = PresetRegistry::with_defaults().unwrap();

        let fade = registry.get("fade").unwrap();
        assert_eq!(fade.duration, 1.0);
        assert_eq!(
            fade.kind,
            TransitionKind::Fade {
                out_time: 0.5,
                hold_time: 0.0,
                in_time: 0.5,
                color: [0, 0, 0],
            }
        );

        let dissolve = registry.get("dissolve").unwrap();
        assert_eq!(dissolve.duration, 0.5);

        let pixellate = registry.get("pixellate").unwrap();
        assert_eq!(pixellate.kind, TransitionKind::Pixellate { steps: 5 });
        assert_eq!(pixellate.duration, 1.0);
    }

    #[test]
    fn test_punch_presets() {
        let registry = PresetRegistry::with_defaults().unwrap();

        let vpunch = registry.get("vpunch").unwrap();
        assert_eq!(vpunch.duration, defaults::PUNCH_DURATION);
        assert_eq!(
            vpunch.kind,
            TransitionKind::Punch {
                axis: PunchAxis::Vertical,
                magnitude: 10.0,
                period: 0.10,
                bounce: true,
                repeat: true,
            }
        );

        let hpunch = registry.get("hpunch").unwrap();
        assert_eq!(hpunch.duration, defaults::PUNCH_DURATION);
        assert_eq!(
            hpunch.kind,
            TransitionKind::Punch {
                axis: PunchAxis::Horizontal,
                magnitude: 15.0,
                period: 0.10,
                bounce: true,
                repeat: true,
            }
        );
    }

    #[test]
    fn test_tile_dissolve_presets() {
        let registry = PresetRegistry::with_defaults().unwrap();

        let blinds = registry.get("blinds").unwrap();
        assert_eq!(
            blinds.kind,
            TransitionKind::ImageDissolve {
                image: defaults::BLINDS_TILE.to_string(),
                ramp_len: 8,
                reverse: false,
            }
        );

        let squares = registry.get("squares").unwrap();
        assert_eq!(
            squares.kind,
            TransitionKind::ImageDissolve {
                image: defaults::SQUARES_TILE.to_string(),
                ramp_len: 256,
                reverse: false,
            }
        );
    }

    #[test]
    fn test_ease_family_uses_cosine_warps() {
        let registry = PresetRegistry::with_defaults().unwrap();

        let easeinright = registry.get("easeinright").unwrap();
        let TransitionKind::Move {
            time_warp, enter, ..
        } = &easeinright.kind
        else {
            panic!("expected Move");
        };
        assert_eq!(*time_warp, TimeWarp::EaseInOut);
        assert_eq!(enter.as_ref().unwrap().time_warp, TimeWarp::EaseIn);

        let easeoutleft = registry.get("easeoutleft").unwrap();
        let TransitionKind::Move { leave, .. } = &easeoutleft.kind else {
            panic!("expected Move");
        };
        assert_eq!(leave.as_ref().unwrap().time_warp, TimeWarp::EaseOut);
    }

    #[test]
    fn test_sorted_entries_are_ordered() {
        let registry = PresetRegistry::with_defaults().unwrap();
        let names: Vec<&str> = registry.sorted_entries().keys().copied().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
