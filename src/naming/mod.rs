//! Name computation: path splitting, policy, and the transformation itself.
//! Pure string functions; nothing here touches the filesystem.

pub mod policy;
pub mod split;
mod transform;

pub use policy::{SpacePolicy, TransformPolicy};
pub use split::{base_name, split_extension, split_path, NameExtensionSplit, SplitPath};
pub use transform::{renamed_path, transform_name};
