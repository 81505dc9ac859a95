use console::style;
use inquire::Select;

use crate::cli::progress::long_running_spinner;
use crate::cli::{prompts, ui};
use crate::docker;
use crate::error::{Error, Result};
use crate::runner::CommandRunner;
use crate::vm;

const MAIN_MENU: &[&str] = &["Docker operations", "VM operations (QEMU)", "Exit"];

const DOCKER_MENU: &[&str] = &[
    "Create Dockerfile",
    "Build image",
    "List images",
    "List running containers",
    "Stop a container",
    "Search local images",
    "Search DockerHub",
    "Pull image from DockerHub",
    "Back",
];

const VM_MENU: &[&str] = &[
    "Create VM (interactive)",
    "Create VM (from config file)",
    "Back",
];

/// Top-level menu loop. Returns when the user picks Exit (or presses Esc).
pub async fn main_menu(runner: &dyn CommandRunner) -> Result<()> {
    loop {
        println!();
        let choice = Select::new("Cloud Management System", MAIN_MENU.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit")
            .prompt();

        match choice {
            Ok("Docker operations") => docker_menu(runner).await,
            Ok("VM operations (QEMU)") => vm_menu(runner).await,
            _ => return Ok(()),
        }
    }
}

async fn docker_menu(runner: &dyn CommandRunner) {
    loop {
        println!();
        let choice = Select::new("Docker Menu", DOCKER_MENU.to_vec()).prompt();

        let (context, result) = match choice {
            Ok("Create Dockerfile") => ("Dockerfile creation failed.", create_dockerfile().await),
            Ok("Build image") => ("Build failed.", build_image(runner).await),
            Ok("List images") => ("Failed to list images.", list_images(runner).await),
            Ok("List running containers") => (
                "Failed to list running containers.",
                list_containers(runner).await,
            ),
            Ok("Stop a container") => ("Stop failed.", stop_container(runner).await),
            Ok("Search local images") => (
                "Failed to search local images.",
                search_local_images(runner).await,
            ),
            Ok("Search DockerHub") => ("DockerHub search failed.", search_registry(runner).await),
            Ok("Pull image from DockerHub") => ("Pull failed.", pull_image(runner).await),
            _ => return,
        };

        report(context, result);
    }
}

async fn vm_menu(runner: &dyn CommandRunner) {
    loop {
        println!();
        let choice = Select::new("VM (QEMU) Menu", VM_MENU.to_vec()).prompt();

        let (context, result) = match choice {
            Ok("Create VM (interactive)") => {
                ("VM creation failed.", create_vm_interactive(runner).await)
            }
            Ok("Create VM (from config file)") => {
                ("VM creation failed.", create_vm_from_config(runner).await)
            }
            _ => return,
        };

        report(context, result);
    }
}

/// Surface an action's failure and keep the menu alive.
///
/// Every error is reported once; nothing here terminates the process.
fn report(context: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(Error::UserCancelled) => println!("{}", style("Cancelled.").dim()),
        Err(e) => ui::show_failure(context, &e),
    }
}

async fn create_dockerfile() -> Result<()> {
    let path = prompts::prompt_path("Dockerfile path (example: ./Dockerfile):")?;
    let lines = prompts::read_dockerfile_lines()?;
    docker::write_dockerfile(&path, &lines).await?;
    ui::show_success(&format!("Saved Dockerfile to: {}", path.display()));
    Ok(())
}

async fn build_image(runner: &dyn CommandRunner) -> Result<()> {
    let dockerfile = prompts::prompt_path("Dockerfile path:")?;
    let tag = prompts::prompt_text("Image tag (example: myapp:1.0):")?;

    let spinner = long_running_spinner("Building image...");
    let result = docker::build_image(runner, &dockerfile, &tag).await;
    spinner.finish_and_clear();

    let output = result?;
    ui::show_success("Build successful.");
    ui::show_output(&output);
    Ok(())
}

async fn list_images(runner: &dyn CommandRunner) -> Result<()> {
    ui::show_output(&docker::list_images(runner).await?);
    Ok(())
}

async fn list_containers(runner: &dyn CommandRunner) -> Result<()> {
    ui::show_output(&docker::list_containers(runner).await?);
    Ok(())
}

async fn stop_container(runner: &dyn CommandRunner) -> Result<()> {
    let container = prompts::prompt_text("Container ID or name:")?;
    let output = docker::stop_container(runner, &container).await?;
    ui::show_success("Stopped.");
    ui::show_output(&output);
    Ok(())
}

async fn search_local_images(runner: &dyn CommandRunner) -> Result<()> {
    let query = prompts::prompt_text("Search local images:")?;
    ui::show_output(&docker::search_local_images(runner, &query).await?);
    Ok(())
}

async fn search_registry(runner: &dyn CommandRunner) -> Result<()> {
    let term = prompts::prompt_text("DockerHub search term:")?;
    ui::show_output(&docker::search_registry(runner, &term).await?);
    Ok(())
}

async fn pull_image(runner: &dyn CommandRunner) -> Result<()> {
    let image = prompts::prompt_text("Image to pull (example: nginx:latest):")?;

    let spinner = long_running_spinner("Pulling image...");
    let result = docker::pull_image(runner, &image).await;
    spinner.finish_and_clear();

    let output = result?;
    ui::show_success("Pull successful.");
    ui::show_output(&output);
    Ok(())
}

async fn create_vm_interactive(runner: &dyn CommandRunner) -> Result<()> {
    vm::ensure_qemu(runner).await?;

    let name = prompts::prompt_text("VM name:")?;
    let cpu = prompts::prompt_number("CPU cores (example: 2):")?;
    let memory_mb = prompts::prompt_number("Memory MB (example: 2048):")?;
    let disk_gb = prompts::prompt_number("Disk GB (example: 20):")?;
    let disk_path = prompts::prompt_text("Disk path (example: ./vm1.qcow2):")?;
    let iso_input = prompts::prompt_text("Installer ISO path (leave empty to skip):")?;

    let spec = vm::VmSpec::new(
        name,
        cpu,
        memory_mb,
        disk_gb,
        disk_path,
        vm::parse_iso_path(&iso_input),
    )?;
    provision_and_launch(runner, &spec).await
}

async fn create_vm_from_config(runner: &dyn CommandRunner) -> Result<()> {
    vm::ensure_qemu(runner).await?;

    let path = prompts::prompt_path("Config path (example: ./configs/vm_config.json):")?;
    let spec = vm::load_config(&path).await?;

    ui::show_info(&format!("Creating VM '{}' from config.", spec.name));
    provision_and_launch(runner, &spec).await
}

/// Create the disk, then launch detached. The console never waits on the
/// launched VM.
async fn provision_and_launch(runner: &dyn CommandRunner, spec: &vm::VmSpec) -> Result<()> {
    let spinner = long_running_spinner("Creating disk image...");
    let result = vm::create_disk(runner, spec).await;
    spinner.finish_and_clear();
    result?;

    vm::launch(runner, spec)?;
    ui::show_success("VM launched.");

    if spec.iso_path.is_some() {
        ui::show_hint("The installer should boot now. Install onto the qcow2 disk.");
        ui::show_hint("After installation, launch again without the ISO to boot from disk.");
    }
    Ok(())
}
