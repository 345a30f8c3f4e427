//! # Descriptor 模块
//!
//! 过渡描述符：声明式的效果数据，由宿主渲染器解释执行。
//!
//! ## 设计原则
//!
//! - **声明式**：描述符描述"是什么效果、带什么参数"，不描述"怎么渲染"
//! - **构造即校验**：所有参数校验在构造函数里完成，构造成功后不可变
//! - **引擎无关**：不包含任何渲染后端的类型，可整体序列化
//!
//! 渲染、合成、逐帧插值由宿主渲染器负责，不在本 crate 范围内。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::easing::TimeWarp;
use crate::error::{ConstructionError, TransitionResult};
use crate::offset::DirectionOffset;

/// 自由形式的额外参数包
///
/// 生成器与预设脚本不解释这些键值，原样转发给宿主渲染器；
/// 键的合法性由渲染器负责。
pub type ExtraParams = Map<String, Value>;

/// 移动过渡的进场/退场覆盖
///
/// 描述某个元素在过渡期间如何移入（进场）或移出（退场）屏幕，
/// 独立于主移动。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOverride {
    /// 起点/终点锚点分数
    pub offset: DirectionOffset,
    /// 该元素专用的时间扭曲
    pub time_warp: TimeWarp,
}

/// 震屏轴向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchAxis {
    /// 水平往返
    Horizontal,
    /// 垂直往返
    Vertical,
}

/// 裁剪移动模式
///
/// wipe：图像固定，逐步显露；slide：新图像滑入；
/// slideaway：旧图像滑出盖在新图像上；iris：矩形光圈收放。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropMoveMode {
    WipeRight,
    WipeLeft,
    WipeUp,
    WipeDown,
    SlideRight,
    SlideLeft,
    SlideUp,
    SlideDown,
    SlideAwayRight,
    SlideAwayLeft,
    SlideAwayUp,
    SlideAwayDown,
    IrisIn,
    IrisOut,
}

/// 过渡效果类型
///
/// 标识一个过渡效果的类型及其关联参数。
/// 这是所有效果参数的**唯一来源**，宿主渲染器按类型分发到对应渲染路径。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// 位置移动
    ///
    /// 普通移动（`enter`/`leave` 均为 `None`）在新旧位置之间插值；
    /// 方向变体额外携带进场或退场覆盖。
    Move {
        /// 主移动的时间扭曲
        time_warp: TimeWarp,
        /// 进场覆盖（`in*` 方向变体）
        enter: Option<MoveOverride>,
        /// 退场覆盖（`out*` 方向变体）
        leave: Option<MoveOverride>,
        /// 几何参照取旧元素而非新元素
        reference_old: bool,
        /// 受影响的图层
        layers: Vec<String>,
        /// 原样转发给渲染器的额外参数
        extra: ExtraParams,
    },
    /// 纯色遮罩过渡：淡出到纯色，保持，再淡入新画面
    ///
    /// 描述符的 `duration` 是三个阶段之和。
    Fade {
        out_time: f32,
        hold_time: f32,
        in_time: f32,
        /// 遮罩颜色 (RGB)
        color: [u8; 3],
    },
    /// Alpha 交叉淡化
    Dissolve {
        /// 是否保留 alpha 通道
        alpha: bool,
    },
    /// 像素化过渡（马赛克粒度先增大再还原）
    Pixellate {
        /// 单向步数
        steps: u32,
    },
    /// 裁剪移动过渡（wipe / slide / slideaway / iris）
    CropMove { mode: CropMoveMode },
    /// 瓦片图控制的溶解
    ///
    /// 用瓦片图的红色通道决定各像素的溶解次序。
    ImageDissolve {
        /// 瓦片图片路径
        image: String,
        /// 渐变坡长（像素）
        ramp_len: u32,
        /// 反转溶解次序
        reverse: bool,
    },
    /// 缩放过渡
    Zoom {
        /// 起始缩放系数
        start: f32,
        /// 目标缩放系数
        end: f32,
        /// 到达目标后再缩回起始系数（zoominout）
        return_to_start: bool,
    },
    /// 震屏（周期性往返偏移）
    Punch {
        axis: PunchAxis,
        /// 单侧偏移幅度（单位）
        magnitude: f32,
        /// 单程耗时（秒）；描述符的 `duration` 是总时长
        period: f32,
        /// 往返弹回
        bounce: bool,
        /// 周期重复直到总时长结束
        repeat: bool,
    },
}

/// 过渡描述符
///
/// 构造一次、终生不可变，在注册表中以稳定名称保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    /// 效果类型与参数
    pub kind: TransitionKind,
    /// 总持续时间（秒），恒为正的有限数
    pub duration: f32,
}

impl TransitionDescriptor {
    /// 校验持续时间：必须为正的有限数
    fn checked_duration(duration: f32) -> TransitionResult<f32> {
        if duration.is_finite() && duration > 0.0 {
            Ok(duration)
        } else {
            Err(ConstructionError::InvalidDuration { value: duration })
        }
    }

    /// 校验 Fade 的单个阶段时长：允许为 0，不允许为负
    fn checked_phase(value: f32) -> TransitionResult<f32> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ConstructionError::InvalidPhase { value })
        }
    }

    /// 构造移动过渡
    ///
    /// 普通移动传 `enter`/`leave` 均为 `None`；方向变体恰好设置其中一个。
    pub fn movement(
        duration: f32,
        time_warp: TimeWarp,
        enter: Option<MoveOverride>,
        leave: Option<MoveOverride>,
        reference_old: bool,
        layers: Vec<String>,
        extra: ExtraParams,
    ) -> TransitionResult<Self> {
        let duration = Self::checked_duration(duration)?;
        if layers.is_empty() {
            return Err(ConstructionError::EmptyLayers);
        }
        Ok(Self {
            kind: TransitionKind::Move {
                time_warp,
                enter,
                leave,
                reference_old,
                layers,
                extra,
            },
            duration,
        })
    }

    /// 构造纯色遮罩过渡
    pub fn fade(
        out_time: f32,
        hold_time: f32,
        in_time: f32,
        color: [u8; 3],
    ) -> TransitionResult<Self> {
        let out_time = Self::checked_phase(out_time)?;
        let hold_time = Self::checked_phase(hold_time)?;
        let in_time = Self::checked_phase(in_time)?;
        // 总时长仍需为正：三个阶段不能全为 0
        let duration = Self::checked_duration(out_time + hold_time + in_time)?;
        Ok(Self {
            kind: TransitionKind::Fade {
                out_time,
                hold_time,
                in_time,
                color,
            },
            duration,
        })
    }

    /// 构造交叉淡化过渡
    pub fn dissolve(duration: f32, alpha: bool) -> TransitionResult<Self> {
        Ok(Self {
            kind: TransitionKind::Dissolve { alpha },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 构造像素化过渡
    pub fn pixellate(duration: f32, steps: u32) -> TransitionResult<Self> {
        if steps == 0 {
            return Err(ConstructionError::InvalidSteps { steps });
        }
        Ok(Self {
            kind: TransitionKind::Pixellate { steps },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 构造裁剪移动过渡
    pub fn crop_move(duration: f32, mode: CropMoveMode) -> TransitionResult<Self> {
        Ok(Self {
            kind: TransitionKind::CropMove { mode },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 构造瓦片溶解过渡
    pub fn image_dissolve(
        duration: f32,
        image: impl Into<String>,
        ramp_len: u32,
        reverse: bool,
    ) -> TransitionResult<Self> {
        let image = image.into();
        if image.is_empty() {
            return Err(ConstructionError::EmptyMaskImage);
        }
        if ramp_len == 0 {
            return Err(ConstructionError::InvalidSteps { steps: ramp_len });
        }
        Ok(Self {
            kind: TransitionKind::ImageDissolve {
                image,
                ramp_len,
                reverse,
            },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 构造缩放过渡
    pub fn zoom(
        duration: f32,
        start: f32,
        end: f32,
        return_to_start: bool,
    ) -> TransitionResult<Self> {
        for factor in [start, end] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ConstructionError::InvalidZoomFactor { value: factor });
            }
        }
        Ok(Self {
            kind: TransitionKind::Zoom {
                start,
                end,
                return_to_start,
            },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 构造震屏过渡
    ///
    /// # 参数
    /// - `duration`: 总时长（秒）
    /// - `magnitude`: 单侧偏移幅度
    /// - `period`: 单程耗时（秒）
    pub fn punch(
        duration: f32,
        axis: PunchAxis,
        magnitude: f32,
        period: f32,
    ) -> TransitionResult<Self> {
        let period = Self::checked_duration(period)?;
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return Err(ConstructionError::InvalidMagnitude { value: magnitude });
        }
        Ok(Self {
            kind: TransitionKind::Punch {
                axis,
                magnitude,
                period,
                bounce: true,
                repeat: true,
            },
            duration: Self::checked_duration(duration)?,
        })
    }

    /// 是否是移动过渡
    pub fn is_move(&self) -> bool {
        matches!(self.kind, TransitionKind::Move { .. })
    }

    /// 进场偏移（仅 `in*` 移动变体为 `Some`）
    pub fn enter_offset(&self) -> Option<DirectionOffset> {
        match &self.kind {
            TransitionKind::Move {
                enter: Some(ov), ..
            } => Some(ov.offset),
            _ => None,
        }
    }

    /// 退场偏移（仅 `out*` 移动变体为 `Some`）
    pub fn leave_offset(&self) -> Option<DirectionOffset> {
        match &self.kind {
            TransitionKind::Move {
                leave: Some(ov), ..
            } => Some(ov.offset),
            _ => None,
        }
    }
}
