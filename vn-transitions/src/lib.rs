//! # VN Transitions
//!
//! Visual Novel Engine 的过渡预设定义库。
//!
//! ## 架构概述
//!
//! `vn-transitions` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它在初始化阶段构造一张**名称 → 过渡描述符**的注册表，
//! 宿主渲染层按名称取出描述符并解释执行：
//!
//! ```text
//! 参数（字面量） ──► 生成器 / 预设脚本 ──► PresetRegistry
//!                                              │
//!                          场景编排代码按名称查找 ──► 宿主渲染器执行
//! ```
//!
//! ## 核心类型
//!
//! - [`TransitionDescriptor`]：声明式的过渡描述符（效果类型 + 参数）
//! - [`MoveFamily`]：移动过渡族生成器（一次产出 9 个命名绑定）
//! - [`PresetRegistry`]：预设注册表，含全部内置预设
//! - [`TimeWarp`]：时间扭曲函数
//! - [`MoveDirection`]：方向标签与方向偏移表
//!
//! ## 使用示例
//!
//! ```ignore
//! use vn_transitions::{MoveFamily, PresetRegistry, TimeWarp};
//!
//! // 内置预设
//! let mut registry = PresetRegistry::with_defaults()?;
//! let dissolve = registry.get("dissolve").unwrap();
//!
//! // 自定义移动过渡族：注册 slow、slowinright、…、slowoutbottom
//! registry.install_move_family(
//!     &MoveFamily::new("slow", 2.0).with_warps(
//!         TimeWarp::EaseInOut,
//!         TimeWarp::EaseIn,
//!         TimeWarp::EaseOut,
//!     ),
//! )?;
//! ```
//!
//! ## 生命周期
//!
//! 构造单线程同步完成，之后所有描述符不可变，可被任意数量的并发读者
//! 无同步地访问。构造错误（[`ConstructionError`]）同步抛出并使初始化
//! 快速失败，不保留部分注册状态。
//!
//! ## 模块结构
//!
//! - [`descriptor`]：描述符数据模型与构造校验
//! - [`easing`]：时间扭曲函数
//! - [`error`]：错误类型
//! - [`generator`]：移动过渡族生成器
//! - [`offset`]：方向标签与偏移表
//! - [`registry`]：预设注册表与内置预设脚本

pub mod descriptor;
pub mod easing;
pub mod error;
pub mod generator;
pub mod offset;
pub mod registry;

pub use descriptor::{
    CropMoveMode, ExtraParams, MoveOverride, PunchAxis, TransitionDescriptor, TransitionKind,
};
pub use easing::TimeWarp;
pub use error::{ConstructionError, TransitionResult};
pub use generator::{DEFAULT_LAYERS, MoveFamily};
pub use offset::{AnchorFraction, DirectionOffset, MoveDirection};
pub use registry::{PresetRegistry, defaults};
