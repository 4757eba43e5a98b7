use pretty_assertions::assert_eq;
use verdant_css::{ContentSet, Generator, OutputStyle, Preset, Stylesheet};
use verdant_theme::RawToken;

fn generator() -> Generator {
    Generator::from_config(&Preset::Green.config().unwrap()).unwrap()
}

fn selectors(sheet: &Stylesheet) -> Vec<&str> {
    sheet.rules().map(|r| r.selector.as_str()).collect()
}

#[test]
fn primary_button_survives_and_secondary_is_dropped() {
    let content = ContentSet::from_text(r#"<button class="btn-primary">Save</button>"#);
    let sheet = generator().generate(&content).unwrap();

    assert_eq!(
        selectors(&sheet),
        vec![".btn-primary", ".btn-primary:hover", ".btn-primary:active"]
    );
    assert!(sheet.rule(".btn-secondary").is_none());
    assert!(sheet.keyframes.is_empty());
}

#[test]
fn primary_button_declarations() {
    let sheet = generator()
        .generate(&ContentSet::from_text("btn-primary"))
        .unwrap();

    let expected = "\
.btn-primary {
  background-color: #059669;
  color: #ffffff;
  font-weight: 600;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  transition: all 0.2s ease-in-out;
  box-shadow: 0 1px 2px 0 rgba(16, 185, 129, 0.05);
}

.btn-primary:hover {
  background-color: #047857;
  box-shadow: 0 4px 6px -1px rgba(16, 185, 129, 0.1), 0 2px 4px -1px rgba(16, 185, 129, 0.06);
  transform: translateY(-1px);
}

.btn-primary:active {
  background-color: #065f46;
  transform: translateY(0);
}
";
    assert_eq!(sheet.render(OutputStyle::Pretty), expected);
}

#[test]
fn every_component_emits_in_declaration_order() {
    let sheet = generator().emit().unwrap();
    let components: Vec<&str> = sheet.components.iter().map(|r| r.selector.as_str()).collect();
    assert_eq!(
        components,
        vec![
            ".btn-primary",
            ".btn-primary:hover",
            ".btn-primary:active",
            ".btn-secondary",
            ".btn-secondary:hover",
            ".card-green",
            ".card-green:hover",
            ".input-green",
            ".input-green:focus",
            ".input-green::placeholder",
            ".badge-green",
            ".nav-link-green",
            ".nav-link-green:hover",
            ".nav-link-green.active",
            ".alert-success",
            ".gradient-green",
            ".loading-spinner-green",
        ]
    );

    let gradient = sheet.rule(".gradient-green").unwrap();
    assert_eq!(
        gradient.get("background-image"),
        Some("linear-gradient(to right, #34d399, #059669)")
    );
    let secondary = sheet.rule(".btn-secondary").unwrap();
    assert_eq!(secondary.get("border"), Some("1px solid #6ee7b7"));
}

#[test]
fn repeated_generation_is_byte_identical() {
    let content = ContentSet::from_text("btn-primary card-green bg-app animate-pulse-green");
    let first = generator().generate(&content).unwrap().render(OutputStyle::Pretty);
    let second = generator().generate(&content).unwrap().render(OutputStyle::Pretty);
    assert_eq!(first, second);
}

#[test]
fn removing_a_ramp_only_affects_its_rules() {
    let full = generator().emit().unwrap();

    let mut config = Preset::Green.config().unwrap();
    match config.theme.extend.category_mut("colors") {
        Some(RawToken::Group(ramps)) => {
            ramps.shift_remove("sage");
        }
        other => panic!("unexpected colors category: {other:?}"),
    }
    let without_sage = Generator::from_config(&config).unwrap().emit().unwrap();

    let kept: Vec<_> = full
        .rules()
        .filter(|r| !r.selector.contains("sage"))
        .cloned()
        .collect();
    let rebuilt: Vec<_> = without_sage.rules().cloned().collect();
    assert_eq!(kept, rebuilt);
    assert_eq!(full.keyframes, without_sage.keyframes);
}

#[test]
fn keyframes_follow_animation_usage() {
    let content = ContentSet::from_text("loading-spinner-green animate-pulse-green");
    let sheet = generator().generate(&content).unwrap();
    let names: Vec<&str> = sheet.keyframes.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["spin", "pulse-green"]);

    let css = sheet.render(OutputStyle::Pretty);
    assert!(css.contains("@keyframes pulse-green {\n  0%, 100% {\n    opacity: 1;\n  }\n"));
    assert!(css.contains("    background-color: #a7f3d0;\n"));
    assert!(!css.contains("bounce-green"));
}

#[test]
fn extension_utilities_are_generated_and_pruned() {
    let content = ContentSet::from_text("bg-app text-primary-600 p-18 font-display ring-app");
    let sheet = generator().generate(&content).unwrap();

    assert_eq!(
        sheet.rule(".bg-app").unwrap().get("background-color"),
        Some("#f0fdf4")
    );
    assert_eq!(
        sheet.rule(".text-primary-600").unwrap().get("color"),
        Some("#059669")
    );
    assert_eq!(sheet.rule(".p-18").unwrap().get("padding"), Some("4.5rem"));
    assert_eq!(
        sheet.rule(".font-display").unwrap().get("font-family"),
        Some("Poppins, system-ui, sans-serif")
    );
    assert_eq!(
        sheet.rule(".ring-app").unwrap().get("--vd-ring-color"),
        Some("#10b981")
    );
    assert!(sheet.rule(".bg-card").is_none());
    assert!(sheet.rule(".backdrop-blur-green").is_none());
}

#[test]
fn minified_and_pretty_carry_the_same_rules() {
    let content = ContentSet::from_text(
        "btn-primary input-green nav-link-green loading-spinner-green from-green-start shadow-green",
    );
    let sheet = generator().generate(&content).unwrap();

    let strip = |css: &str| css.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let pretty = strip(&sheet.render(OutputStyle::Pretty)).replace(";}", "}");
    let minified = strip(&sheet.render(OutputStyle::Minified));
    assert_eq!(pretty, minified);
}

#[test]
fn preset_resolves_declared_literals() {
    let generator = generator();
    assert_eq!(generator.resolve("colors.primary.600").unwrap(), "#059669");
    assert_eq!(generator.resolve("colors.mint.400").unwrap(), "#2dd4bf");
    assert_eq!(
        generator.resolve("boxShadow.green-sm").unwrap(),
        "0 1px 2px 0 rgba(16, 185, 129, 0.05)"
    );
    assert_eq!(generator.resolve("backdropBlur.green").unwrap(), "blur(16px)");
}
