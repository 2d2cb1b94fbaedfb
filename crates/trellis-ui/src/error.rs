//! Error types for widget-tree materialization.

use std::fmt;

/// Why no layout parameters could be produced for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutParamsFailure {
    /// A leaf node was materialized as a root, with no container to ask.
    NoParentContainer,
    /// The container declares no nested layout-parameter type.
    NoNestedType,
    /// The nested type has neither a `(width, height)` nor a zero-argument
    /// constructor.
    NoSuitableConstructor,
}

impl fmt::Display for LayoutParamsFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutParamsFailure::NoParentContainer => write!(f, "no parent container"),
            LayoutParamsFailure::NoNestedType => {
                write!(f, "container declares no nested layout parameter type")
            }
            LayoutParamsFailure::NoSuitableConstructor => {
                write!(f, "nested layout parameter type has no usable constructor")
            }
        }
    }
}

/// Errors that can occur while building a widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrellisError {
    /// `materialize` was called on a node that already produced its widget.
    AlreadyMaterialized { widget: &'static str },
    /// A style was added after the node was materialized.
    StyleAfterMaterialization { widget: &'static str },
    /// No factory is registered and the type offers no context constructor.
    UnresolvableWidgetType { widget: &'static str },
    /// No layout parameters could be produced for the container.
    UnresolvableLayoutParamsType {
        container: &'static str,
        reason: LayoutParamsFailure,
    },
    /// An earlier materialization of this node failed partway; its queues
    /// were consumed and its widget discarded.
    MaterializationAborted { widget: &'static str },
    /// An adapter position outside `0..count`.
    PositionOutOfRange { position: usize, count: usize },
}

impl fmt::Display for TrellisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrellisError::AlreadyMaterialized { widget } => {
                write!(f, "{} node has already been materialized", widget)
            }
            TrellisError::StyleAfterMaterialization { widget } => {
                write!(f, "cannot add a style to {} after materialization", widget)
            }
            TrellisError::UnresolvableWidgetType { widget } => {
                write!(f, "no factory or context constructor for widget type {}", widget)
            }
            TrellisError::UnresolvableLayoutParamsType { container, reason } => {
                write!(f, "cannot resolve layout parameters for {}: {}", container, reason)
            }
            TrellisError::MaterializationAborted { widget } => {
                write!(f, "{} node was discarded by a failed materialization", widget)
            }
            TrellisError::PositionOutOfRange { position, count } => {
                write!(f, "position {} out of range for {} items", position, count)
            }
        }
    }
}

impl std::error::Error for TrellisError {}

/// Result type for widget-tree operations.
pub type TrellisResult<T> = Result<T, TrellisError>;
