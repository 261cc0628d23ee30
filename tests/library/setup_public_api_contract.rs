use gebug::{AppError, Config, ConfigField, ConfigPrompt, FallbackReason, load_or_default, setup};
use std::cell::Cell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

struct SetImage(&'static str);

impl ConfigPrompt for SetImage {
    fn run(&self, config: &mut Config) -> Result<(), AppError> {
        ConfigField::RuntimeImage.set(config, self.0.to_string());
        Ok(())
    }
}

struct Refuse;

impl ConfigPrompt for Refuse {
    fn run(&self, _config: &mut Config) -> Result<(), AppError> {
        Err(AppError::Prompt("refused".to_string()))
    }
}

struct Counting(Rc<Cell<u32>>);

impl ConfigPrompt for Counting {
    fn run(&self, _config: &mut Config) -> Result<(), AppError> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

#[test]
fn fresh_project_loads_fallback_config() {
    let temp = TempDir::new().unwrap();
    let proj = temp.path().join("proj");
    fs::create_dir_all(&proj).unwrap();

    let (config, found) = load_or_default(&proj);

    assert!(!found);
    assert_eq!(
        config,
        Config {
            output_binary: "/app".to_string(),
            build_command: "go build -o {{.output_binary}}".to_string(),
            run_command: "{{.output_binary}}".to_string(),
            runtime_image: "golang:1.14".to_string(),
        }
    );
}

#[test]
fn setup_with_image_prompt_persists_for_reload() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let (mut config, _) = load_or_default(root);
    let prompts: Vec<Box<dyn ConfigPrompt>> = vec![Box::new(SetImage("golang:1.18"))];
    setup(&mut config, &prompts, root).expect("setup failed");

    let (reloaded, found) = load_or_default(root);
    assert!(found);
    assert_eq!(reloaded.runtime_image, "golang:1.18");
    assert!(root.join(".gebug/config.yaml").is_file());
}

#[test]
fn failing_prompt_short_circuits_setup() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let later_runs = Rc::new(Cell::new(0));

    let mut config = Config::default();
    let prompts: Vec<Box<dyn ConfigPrompt>> = vec![
        Box::new(SetImage("golang:1.20")),
        Box::new(Refuse),
        Box::new(Counting(Rc::clone(&later_runs))),
    ];
    let err = setup(&mut config, &prompts, root).expect_err("setup should fail");

    assert!(matches!(err, AppError::Prompt(ref message) if message == "refused"));
    assert_eq!(later_runs.get(), 0);
    assert_eq!(config.runtime_image, "golang:1.20");
    assert!(!root.join(".gebug").exists());
}

#[test]
fn show_distinguishes_loaded_from_defaulted() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let before = gebug::show(root);
    assert_eq!(before.fallback, Some(FallbackReason::Missing));

    let mut config = Config::default();
    setup(&mut config, &[], root).unwrap();

    let after = gebug::show(root);
    assert!(after.found_existing());
    assert_eq!(after.config, Config::default());
}
