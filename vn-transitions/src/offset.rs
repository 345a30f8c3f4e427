//! # Offset 模块
//!
//! 方向标签与方向偏移表。
//!
//! 偏移表是只读数据，不含任何计算：每个方向标签对应一个 4 元组，
//! 描述元素在过渡起点/终点处的水平与垂直锚点分数。
//! `in*` 描述**进场**元素从哪里来到哪里去；`out*` 描述**退场**元素。
//! 同轴的 in/out 分数相同是有意的：区别在角色（进场/退场工厂），不在几何。

use serde::{Deserialize, Serialize};

/// 锚点分数
///
/// - `Some(f)`：容器尺寸的分数位置 (0.0 - 1.0)
/// - `None`：该轴不约束，保留元素原本的位置
pub type AnchorFraction = Option<f32>;

/// 方向偏移
///
/// 一个不可变 4 元组：过渡起点与终点处的 (x, y) 锚点分数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionOffset {
    pub x_start: AnchorFraction,
    pub y_start: AnchorFraction,
    pub x_end: AnchorFraction,
    pub y_end: AnchorFraction,
}

impl DirectionOffset {
    /// 创建方向偏移
    pub const fn new(
        x_start: AnchorFraction,
        y_start: AnchorFraction,
        x_end: AnchorFraction,
        y_end: AnchorFraction,
    ) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }
}

/// 方向标签
///
/// 8 个方向变体的**唯一来源**：名称后缀与偏移分数都只在这里定义。
///
/// | 标签 | 起点 (x, y) | 终点 (x, y) |
/// |------|------------|------------|
/// | `inright`   | (1.0, -) | (0.0, -) |
/// | `inleft`    | (0.0, -) | (1.0, -) |
/// | `intop`     | (-, 0.0) | (-, 1.0) |
/// | `inbottom`  | (-, 1.0) | (-, 0.0) |
/// | `outright`  | (1.0, -) | (0.0, -) |
/// | `outleft`   | (0.0, -) | (1.0, -) |
/// | `outtop`    | (-, 0.0) | (-, 1.0) |
/// | `outbottom` | (-, 1.0) | (-, 0.0) |
///
/// `-` 表示该轴不约束。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    InRight,
    InLeft,
    InTop,
    InBottom,
    OutRight,
    OutLeft,
    OutTop,
    OutBottom,
}

impl MoveDirection {
    /// 全部方向，按固定顺序（先进场后退场）
    pub const ALL: [MoveDirection; 8] = [
        MoveDirection::InRight,
        MoveDirection::InLeft,
        MoveDirection::InTop,
        MoveDirection::InBottom,
        MoveDirection::OutRight,
        MoveDirection::OutLeft,
        MoveDirection::OutTop,
        MoveDirection::OutBottom,
    ];

    /// 注册名后缀（拼接在过渡族前缀之后）
    pub fn suffix(&self) -> &'static str {
        match self {
            MoveDirection::InRight => "inright",
            MoveDirection::InLeft => "inleft",
            MoveDirection::InTop => "intop",
            MoveDirection::InBottom => "inbottom",
            MoveDirection::OutRight => "outright",
            MoveDirection::OutLeft => "outleft",
            MoveDirection::OutTop => "outtop",
            MoveDirection::OutBottom => "outbottom",
        }
    }

    /// 是否是进场方向
    pub fn is_enter(&self) -> bool {
        matches!(
            self,
            MoveDirection::InRight
                | MoveDirection::InLeft
                | MoveDirection::InTop
                | MoveDirection::InBottom
        )
    }

    /// 查方向偏移表
    pub fn offset(&self) -> DirectionOffset {
        match self {
            MoveDirection::InRight | MoveDirection::OutRight => {
                DirectionOffset::new(Some(1.0), None, Some(0.0), None)
            }
            MoveDirection::InLeft | MoveDirection::OutLeft => {
                DirectionOffset::new(Some(0.0), None, Some(1.0), None)
            }
            MoveDirection::InTop | MoveDirection::OutTop => {
                DirectionOffset::new(None, Some(0.0), None, Some(1.0))
            }
            MoveDirection::InBottom | MoveDirection::OutBottom => {
                DirectionOffset::new(None, Some(1.0), None, Some(0.0))
            }
        }
    }
}
