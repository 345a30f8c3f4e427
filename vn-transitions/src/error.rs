//! # Error 模块
//!
//! 定义 vn-transitions 中使用的错误类型。
//!
//! 所有错误都发生在**构造阶段**（进程初始化时）。预设一旦构造完成即不可变，
//! 之后的读取没有任何错误面。构造错误不在本地恢复，而是原样向上传播，
//! 让初始化快速失败，避免产生残缺的预设表。

use thiserror::Error;

/// 构造错误
///
/// 由描述符构造函数与过渡族生成器抛出。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// 无效的持续时间
    #[error("无效的持续时间 {value}：必须为正的有限数")]
    InvalidDuration { value: f32 },

    /// 无效的阶段时长（Fade 的淡出/保持/淡入阶段）
    #[error("无效的阶段时长 {value}：不能为负或非有限数")]
    InvalidPhase { value: f32 },

    /// 无效的像素化步数
    #[error("无效的像素化步数 {steps}：至少为 1")]
    InvalidSteps { steps: u32 },

    /// 无效的缩放系数
    #[error("无效的缩放系数 {value}：必须为正的有限数")]
    InvalidZoomFactor { value: f32 },

    /// 无效的震屏幅度
    #[error("无效的震屏幅度 {value}：必须为正的有限数")]
    InvalidMagnitude { value: f32 },

    /// 遮罩瓦片图片路径为空
    #[error("遮罩瓦片图片路径为空")]
    EmptyMaskImage,

    /// 过渡族前缀为空
    #[error("过渡族前缀为空")]
    EmptyPrefix,

    /// 图层集合为空
    #[error("图层集合为空")]
    EmptyLayers,
}

/// Result 类型别名
pub type TransitionResult<T> = Result<T, ConstructionError>;
