use anyhow::Result;
use pretty_assertions::assert_eq;

use super::CliTest;

#[test]
fn extracts_keys_from_templates_and_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/app/banner.component.html",
        r#"
            <div>
                <translate key="dfa.banner.title"></translate>
                <translate>  Hello World  </translate>
                <translate [key]="['dfa.a|One', 'dfa.b|Two']"></translate>
            </div>
        "#,
    )?;
    test.write_file(
        "src/app/banner.service.ts",
        r#"
            export class BannerService {
                title = 'dfa.banner.fallback|Banner';
                link = 'dfa.banner.link|http://example.com';
            }
        "#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("dfa.banner.title"));
    assert!(stdout.contains("Hello World"));
    assert!(stdout.contains("dfa.a|One"));
    assert!(stdout.contains("dfa.b|Two"));
    assert!(stdout.contains("dfa.banner.fallback|Banner"));
    // URL payloads are placeholder sentinels, never keys.
    assert!(!stdout.contains("dfa.banner.link|http://example.com"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("keys extracted"));
    Ok(())
}

#[test]
fn inline_component_template_is_isolated() -> Result<()> {
    let test = CliTest::with_file(
        "src/app/banner.component.ts",
        r#"
            import { Component } from '@angular/core';

            @Component({
                selector: 'app-banner',
                template: `<translate key="dfa.inline.key"></translate>`
            })
            export class BannerComponent {}
        "#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("dfa.inline.key"));
    Ok(())
}

#[test]
fn writes_inventory_to_output_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/home.html",
        r#"<translate key="dfa.home.title"></translate>"#,
    )?;

    let output = test
        .extract_command()
        .args(["--output", "keys.json"])
        .output()?;
    assert!(output.status.success());

    let written = test.read_file("keys.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(parsed["dfa.home.title"], "");
    Ok(())
}

#[test]
fn malformed_template_fails_that_file_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/bad.html", "<translate>")?;
    test.write_file(
        "src/good.html",
        r#"<translate key="dfa.good.key"></translate>"#,
    )?;

    let output = test.extract_command().output()?;
    // Exit code 1: extraction finished, but one file failed.
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("dfa.good.key"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("bad.html"));
    Ok(())
}

#[test]
fn respects_source_root_override() -> Result<()> {
    let test = CliTest::with_file(
        "ui/home.html",
        r#"<translate key="dfa.ui.key"></translate>"#,
    )?;

    let output = test
        .extract_command()
        .args(["--source-root", "ui"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("dfa.ui.key"));
    Ok(())
}

#[test]
fn config_file_drives_defaults() -> Result<()> {
    let test = CliTest::with_file(
        "app/home.html",
        r#"<translate key="dfa.config.key"></translate>"#,
    )?;
    test.write_file(
        ".ngkeysrc.json",
        r#"{ "sourceRoot": "app", "output": "dist/keys.json" }"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let written = test.read_file("dist/keys.json")?;
    assert!(written.contains("dfa.config.key"));
    Ok(())
}
