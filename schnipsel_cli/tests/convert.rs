mod common;

use schnipsel_core::AnyEmptyResult;
use schnipsel_core::AnyResult;
use serde_json::Value;
use serde_json::json;

const SUCCESS: &str = "Snippet created! You can now paste it into your snippets file.";

const COUNTER: &str = "import { useState } from 'react';
type CounterProps = {
initialCount?: number;
};
export default function Counter({ initialCount = 0 }: CounterProps) {
const [count, setCount] = useState(initialCount);
function increment() {
setCount(count + 1);
}
return <button onClick={increment}>Increment</button>;
}
";

/// Wrap a printed snippet fragment back into a JSON document.
fn parse_fragment(stdout: &[u8]) -> AnyResult<Value> {
	let fragment = String::from_utf8(stdout.to_vec())?;
	Ok(serde_json::from_str(&format!("{{{fragment}}}"))?)
}

#[test]
fn converts_typescript_react_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("Counter.tsx");
	std::fs::write(&file, COUNTER)?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains(SUCCESS));

	let snippet = parse_fragment(&assert.get_output().stdout)?;
	assert_eq!(
		snippet,
		json!({
			"Snippet from Counter": {
				"prefix": "Counter",
				"body": [
					"import { useState } from 'react';",
					"type ${1:CounterProps} = {",
					"initialCount?: number;",
					"};",
					"export default function ${2:Counter}({ initialCount = 0 }: $1) {",
					"const [count, setCount] = useState(initialCount);",
					"function ${3:increment}() {",
					"setCount(count + 1);",
					"}",
					"return <button onClick={$3}>Increment</button>;",
					"}",
				],
				"description": "Auto-generated typescriptreact snippet from Counter",
			}
		})
	);

	Ok(())
}

#[test]
fn converts_stdin_with_explicit_language() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg("--language")
		.arg("javascript")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("function greet(name) {}\ngreet('world')\n")
		.assert()
		.success();

	let snippet = parse_fragment(&assert.get_output().stdout)?;
	let entry = &snippet["Snippet from snippet"];
	assert_eq!(entry["prefix"], "snippet");
	assert_eq!(
		entry["body"],
		json!(["function ${1:greet}(name) {}", "$1('world')"])
	);
	assert_eq!(
		entry["description"],
		"Auto-generated javascript snippet from snippet"
	);

	Ok(())
}

#[test]
fn body_only_prints_json_array() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("sum.js");
	std::fs::write(
		&file,
		"function calculateSum(a, b) {\nconst result = a + b;\nreturn result;\n}\n",
	)?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--body-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let body: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(
		body,
		json!([
			"function ${1:calculateSum}(a, b) {",
			"const result = a + b;",
			"return result;",
			"}",
		])
	);

	Ok(())
}

#[test]
fn converts_selected_lines_only() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("Counter.tsx");
	std::fs::write(&file, COUNTER)?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--lines")
		.arg("7:9")
		.arg("--body-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let body: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(
		body,
		json!(["function ${1:increment}() {", "setCount(count + 1);", "}"])
	);

	Ok(())
}

#[test]
fn no_placeholder_flag_renders_bare_tab_stops() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg("--language")
		.arg("typescript")
		.arg("--no-placeholder")
		.arg("--body-only")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("interface Props {}\nfunction Foo(props: Props) {}")
		.assert()
		.success();

	let body: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(body, json!(["interface $1 {}", "function $2(props: $1) {}"]));

	Ok(())
}

#[test]
fn name_and_prefix_overrides() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("Counter.tsx");
	std::fs::write(&file, COUNTER)?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--name")
		.arg("React counter")
		.arg("--prefix")
		.arg("rcounter")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let snippet = parse_fragment(&assert.get_output().stdout)?;
	assert_eq!(snippet["React counter"]["prefix"], "rcounter");
	assert!(snippet.get("Snippet from Counter").is_none());

	Ok(())
}

#[test]
fn config_supplies_language_and_placeholder() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("schnipsel.toml"),
		"placeholder = false\nlanguage = \"javascriptreact\"\n",
	)?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg("--body-only")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("const Item = memo(Base);\n<Item />")
		.assert()
		.success();

	let body: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(body, json!(["const $1 = memo(Base);", "<$1 />"]));

	Ok(())
}

#[test]
fn language_flag_overrides_extension() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("context.ts");
	std::fs::write(&file, "const Ctx = createContext(null);")?;

	let assert = common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--language")
		.arg("typescriptreact")
		.arg("--body-only")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let body: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(body, json!(["const ${1:Ctx} = createContext(null);"]));

	Ok(())
}

#[test]
fn unsupported_language_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg("--language")
		.arg("python")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("def main():\n    pass\n")
		.assert()
		.code(2)
		.stdout(predicates::str::is_empty())
		.stderr(predicates::str::contains("Currently not supported."))
		.stderr(predicates::str::contains("schnipsel::unsupported_language"));

	Ok(())
}

#[test]
fn unknown_extension_without_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("main.py");
	std::fs::write(&file, "def main():\n    pass\n")?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("Currently not supported."))
		.stderr(predicates::str::contains("schnipsel::missing_language"));

	Ok(())
}

#[test]
fn selection_outside_input_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let file = tmp.path().join("sum.js");
	std::fs::write(&file, "function sum(a, b) {\nreturn a + b;\n}\n")?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg(&file)
		.arg("--lines")
		.arg("2:10")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("Failed to create snippet."))
		.stderr(predicates::str::contains("schnipsel::selection_out_of_range"));

	Ok(())
}

#[test]
fn invalid_selection_is_rejected_by_argument_parsing() -> AnyEmptyResult {
	common::schnipsel_cmd()?
		.arg("convert")
		.arg("--lines")
		.arg("0:3")
		.assert()
		.failure()
		.stderr(predicates::str::contains("invalid line selection"));

	Ok(())
}

#[test]
fn missing_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg(tmp.path().join("Missing.tsx"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("Failed to create snippet."));

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("schnipsel.toml"), "placeholder = ")?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg("--language")
		.arg("javascript")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("function a() {}")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("schnipsel::config_parse"));

	Ok(())
}

#[test]
fn verbose_logs_registrations() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::schnipsel_cmd()?
		.arg("convert")
		.arg("--language")
		.arg("javascript")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.write_stdin("function a() {}")
		.assert()
		.success()
		.stderr(predicates::str::contains("registered tab stop"));

	Ok(())
}

#[test]
fn no_subcommand_prints_usage_hint() -> AnyEmptyResult {
	common::schnipsel_cmd()?
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));

	Ok(())
}
