//! # Easing 模块
//!
//! 时间扭曲（time warp）函数：把归一化进度 [0,1] 映射为加权后的进度 [0,1]，
//! 用于调整移动过渡的节奏。
//!
//! 只定义三条余弦曲线和恒等映射。宿主渲染器的逐帧插值不在本 crate 范围内，
//! 这里只是**命名数据**，由描述符携带给渲染器。

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// 时间扭曲函数
///
/// `Linear` 表示"未指定曲线"，即恒等映射。
///
/// ## 调用方契约
///
/// `apply` 的入参必须在 [0,1] 内；范围外的行为未定义（不做 clamp）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWarp {
    /// 线性（恒等映射，匀速）
    #[default]
    Linear,
    /// 缓入（先快后慢，减速进入终点）
    EaseIn,
    /// 缓出（先慢后快，加速冲向终点）
    EaseOut,
    /// 缓入缓出（半余弦混合，两头慢中间快）
    EaseInOut,
}

impl TimeWarp {
    /// 计算扭曲后的进度
    ///
    /// # 参数
    /// - `t`: 归一化进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 扭曲后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            TimeWarp::Linear => t,
            TimeWarp::EaseIn => ((1.0 - t) * PI / 2.0).cos(),
            TimeWarp::EaseOut => 1.0 - (t * PI / 2.0).cos(),
            TimeWarp::EaseInOut => 0.5 - (PI * t).cos() / 2.0,
        }
    }
}
