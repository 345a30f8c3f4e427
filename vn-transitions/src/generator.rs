//! # Generator 模块
//!
//! 移动过渡族生成器：由一组几何/时序参数确定性地生成 9 个命名的移动过渡
//! （1 个普通移动 + 4 个进场方向 + 4 个退场方向）。
//!
//! 生成器自身没有可失败的逻辑，只是委托描述符构造；构造错误用 `?` 原样
//! 向上传播，不重试、不吞掉。同一前缀重复生成是合法的，由注册表按
//! 后写覆盖语义替换全部 9 个绑定（见 [`registry`](crate::registry)）。

use crate::descriptor::{ExtraParams, MoveOverride, TransitionDescriptor};
use crate::easing::TimeWarp;
use crate::error::{ConstructionError, TransitionResult};
use crate::offset::MoveDirection;

/// 默认图层集合
pub const DEFAULT_LAYERS: &[&str] = &["master"];

/// 移动过渡族参数
///
/// 每个绑定的描述符完全由这些参数决定，除时间扭曲表与方向偏移表外
/// 没有任何隐藏状态。
///
/// # 示例
///
/// ```ignore
/// let family = MoveFamily::new("move", 0.5);
/// let bindings = family.generate()?;          // 9 个 (名称, 描述符)
/// assert_eq!(bindings.len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MoveFamily {
    /// 注册名前缀（普通移动直接用前缀，方向变体拼接方向后缀）
    pub prefix: String,
    /// 持续时间（秒）
    pub delay: f32,
    /// 主移动的时间扭曲
    pub time_warp: TimeWarp,
    /// 进场元素的时间扭曲（`in*` 变体）
    pub in_time_warp: TimeWarp,
    /// 退场元素的时间扭曲（`out*` 变体）
    pub out_time_warp: TimeWarp,
    /// 几何参照取旧元素而非新元素
    pub reference_old: bool,
    /// 受影响的图层
    pub layers: Vec<String>,
    /// 原样转发给渲染器的额外参数
    pub extra: ExtraParams,
}

impl MoveFamily {
    /// 创建过渡族参数（全部曲线为线性，图层为 `["master"]`）
    pub fn new(prefix: impl Into<String>, delay: f32) -> Self {
        Self {
            prefix: prefix.into(),
            delay,
            time_warp: TimeWarp::default(),
            in_time_warp: TimeWarp::default(),
            out_time_warp: TimeWarp::default(),
            reference_old: false,
            layers: DEFAULT_LAYERS.iter().map(|s| s.to_string()).collect(),
            extra: ExtraParams::new(),
        }
    }

    /// 设置主移动/进场/退场的时间扭曲
    pub fn with_warps(
        mut self,
        time_warp: TimeWarp,
        in_time_warp: TimeWarp,
        out_time_warp: TimeWarp,
    ) -> Self {
        self.time_warp = time_warp;
        self.in_time_warp = in_time_warp;
        self.out_time_warp = out_time_warp;
        self
    }

    /// 以旧元素为几何参照
    pub fn with_reference_old(mut self, reference_old: bool) -> Self {
        self.reference_old = reference_old;
        self
    }

    /// 设置受影响的图层
    pub fn with_layers(mut self, layers: Vec<String>) -> Self {
        self.layers = layers;
        self
    }

    /// 设置额外参数包
    pub fn with_extra(mut self, extra: ExtraParams) -> Self {
        self.extra = extra;
        self
    }

    /// 生成全部 9 个绑定
    ///
    /// 顺序固定：先普通移动，然后按 [`MoveDirection::ALL`] 的顺序。
    /// 任何一个描述符构造失败都返回错误，不产生部分结果。
    pub fn generate(&self) -> TransitionResult<Vec<(String, TransitionDescriptor)>> {
        if self.prefix.is_empty() {
            return Err(ConstructionError::EmptyPrefix);
        }

        let mut bindings = Vec::with_capacity(1 + MoveDirection::ALL.len());

        // 普通移动：无进场/退场覆盖，直接绑定在前缀名下
        bindings.push((
            self.prefix.clone(),
            TransitionDescriptor::movement(
                self.delay,
                self.time_warp,
                None,
                None,
                self.reference_old,
                self.layers.clone(),
                self.extra.clone(),
            )?,
        ));

        for direction in MoveDirection::ALL {
            let overridden = MoveOverride {
                offset: direction.offset(),
                time_warp: if direction.is_enter() {
                    self.in_time_warp
                } else {
                    self.out_time_warp
                },
            };
            let (enter, leave) = if direction.is_enter() {
                (Some(overridden), None)
            } else {
                (None, Some(overridden))
            };

            bindings.push((
                format!("{}{}", self.prefix, direction.suffix()),
                TransitionDescriptor::movement(
                    self.delay,
                    self.time_warp,
                    enter,
                    leave,
                    self.reference_old,
                    self.layers.clone(),
                    self.extra.clone(),
                )?,
            ));
        }

        Ok(bindings)
    }
}
