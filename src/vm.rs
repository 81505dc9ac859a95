//! QEMU virtual machine operations
//!
//! A VM is described by a [`VmSpec`], built either from interactive
//! prompts or from a JSON config file. Creation is two external calls:
//! `qemu-img create` for the disk, then a detached `qemu-system-x86_64`
//! launch that the console never waits on.

mod create;
mod spec;

pub use create::{create_disk, create_vm, ensure_qemu, launch, launch_args};
pub use spec::{VmSpec, load_config, parse_iso_path};
