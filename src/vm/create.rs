use super::spec::VmSpec;
use crate::error::{Error, Result};
use crate::runner::{CommandRunner, DEFAULT_TIMEOUT, LONG_TIMEOUT};

/// Check that both qemu binaries are present and runnable.
pub async fn ensure_qemu(runner: &dyn CommandRunner) -> Result<()> {
    let img = runner
        .run("qemu-img", &["--version"], DEFAULT_TIMEOUT)
        .await;
    let system = runner
        .run("qemu-system-x86_64", &["--version"], DEFAULT_TIMEOUT)
        .await;

    if img.success && system.success {
        Ok(())
    } else {
        Err(Error::QemuNotAvailable)
    }
}

/// Create the VM's qcow2 disk image.
pub async fn create_disk(runner: &dyn CommandRunner, spec: &VmSpec) -> Result<()> {
    let size = format!("{}G", spec.disk_gb);
    let outcome = runner
        .run(
            "qemu-img",
            &["create", "-f", "qcow2", &spec.disk_path, &size],
            LONG_TIMEOUT,
        )
        .await;

    if outcome.success {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            program: "qemu-img".to_string(),
            diagnostic: outcome.diagnostic().to_string(),
        })
    }
}

/// Build the qemu-system argument vector for a spec.
///
/// With an ISO attached, the machine boots from it first (`-boot d`) so
/// the installer starts; otherwise it boots from the disk.
pub fn launch_args(spec: &VmSpec) -> Vec<String> {
    let mut args = vec![
        "-m".to_string(),
        spec.memory_mb.to_string(),
        "-smp".to_string(),
        spec.cpu.to_string(),
        "-hda".to_string(),
        spec.disk_path.clone(),
    ];
    if let Some(iso) = &spec.iso_path {
        args.push("-cdrom".to_string());
        args.push(iso.to_string_lossy().into_owned());
        args.push("-boot".to_string());
        args.push("d".to_string());
    }
    args
}

/// Launch the VM as a detached process; the console never waits on it.
pub fn launch(runner: &dyn CommandRunner, spec: &VmSpec) -> Result<()> {
    if let Some(iso) = &spec.iso_path {
        if !iso.exists() {
            return Err(Error::IsoNotFound { path: iso.clone() });
        }
    }

    let args = launch_args(spec);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.spawn_detached("qemu-system-x86_64", &args)
}

/// Create a VM end to end: check qemu, create the disk, launch detached.
///
/// Stops at the first failure; the disk is left behind if the launch
/// fails, matching qemu's own behavior.
pub async fn create_vm(runner: &dyn CommandRunner, spec: &VmSpec) -> Result<()> {
    ensure_qemu(runner).await?;
    create_disk(runner, spec).await?;
    launch(runner, spec)
}
