//! Whole-function extraction across languages

use funcslice::{extract_function, ExtractResult, SliceOutcome};

fn assert_verbatim(filename: &str, code: &str, probes: &[i64]) {
    for &line in probes {
        let result = extract_function(code, filename, line);
        assert_eq!(result.outcome, SliceOutcome::Sliced, "{}:{}", filename, line);
        assert_eq!(result.meta.target_line, line);
        assert!(!result.text.trim().is_empty());
        assert!(
            code.contains(&result.text),
            "{}:{} returned a fragment not present in the source:\n{}",
            filename,
            line,
            result.text
        );
        let (start, end) = result.meta.function_lines.expect("function lines");
        assert!(start as i64 <= line && line <= end as i64);
    }
}

fn extract(filename: &str, code: &str, line: i64) -> ExtractResult {
    extract_function(code, filename, line)
}

#[test]
fn test_python_decorators_and_nested() {
    let code = "\
def helper():
    return 0

@decorator1
@decorator2(param=42)
def foo(x, y):
    def inner(a):
        return a + 1
    if x > y:
        return inner(x)  # Ln 10
    else:
        return inner(y)

class C:
    @classmethod
    def bar(cls):
        return 'ok'
";
    assert_verbatim("mod.py", code, &[6, 7, 10, 12]);
    let result = extract("mod.py", code, 8);
    assert!(result.text.starts_with("def foo"));
    assert_eq!(result.meta.function_lines, Some((6, 12)));
    assert_eq!(result.meta.relative_line, Some(3));
}

#[test]
fn test_cpp_overloads_and_namespaces() {
    let code = "\
int add(int a, int b) { return a + b; }

namespace N {
int add(int a, int b, int c) {
    int s = a + b;
    return s + c; // ln6
}
}
";
    assert_verbatim("a.cpp", code, &[1, 5, 6]);
    let result = extract("a.cpp", code, 6);
    assert!(result.text.starts_with("int add(int a, int b, int c)"));
    assert_eq!(result.meta.function_lines, Some((4, 7)));
}

#[test]
fn test_js_class_method_and_arrow() {
    let code = "\
// top-level function
function foo(a) {
  const x = n => n+1;
  return x(a); // ln4
}

class K {
  method(p) {
    return foo(p);
  }
}

// arrow at top level
const z = (m) => { return m * 2; };
";
    assert_verbatim("app.js", code, &[3, 4, 9, 14]);
    let result = extract("app.js", code, 8);
    assert!(result.text.starts_with("method("));
    let result = extract("app.js", code, 3);
    assert!(result.text.starts_with("function foo"));
}

#[test]
fn test_typescript_generics_and_class_method() {
    let code = "\
class Box<T> {
  value: T;
  constructor(v: T) { this.value = v; }
  get(): T { return this.value; } // ln4
}

function foo<T extends number>(x: T): T {
  return x + 1;
}
";
    assert_verbatim("app.ts", code, &[3, 4, 7]);
    assert!(extract("app.ts", code, 8).text.starts_with("function foo"));
}

#[test]
fn test_java_methods_and_overloads() {
    let code = "\
class A {
    int foo(int x) { if (x>0) return x; return -x; }
    String foo(String s) { return s.trim(); } // ln3
    static int bar() { return 1; }
}
";
    assert_verbatim("A.java", code, &[2, 3, 4]);
    assert!(extract("A.java", code, 3).text.contains("foo(String s)"));
}

#[test]
fn test_csharp_local_function_resolves_to_method() {
    let code = "\
class A {
    int Foo(int x) {
        int Inner(int t) { return t+1; } // ln3
        if (x>0) return Inner(x);
        return Inner(-x);
    }

    static string Bar() { return \"ok\"; }
}
";
    assert_verbatim("A.cs", code, &[3, 4, 6, 8]);
    let result = extract("A.cs", code, 3);
    assert!(result.text.starts_with("int Foo("));
}

#[test]
fn test_go_receiver_and_plain_func() {
    let code = "\
package main

type S struct { v int }

func (s *S) Inc() int {
\ts.v++
\treturn s.v // ln7
}

func Add(a, b int) int { return a + b }
";
    assert_verbatim("main.go", code, &[6, 7, 10]);
    assert!(extract("main.go", code, 7).text.contains("Inc("));
}

#[test]
fn test_ruby_methods_singleton_and_normal() {
    let code = "\
class C
  def self.k
    1
  end

  def foo(x)
    if x > 0
      x # ln8
    else
      -x
    end
  end
end
";
    assert_verbatim("a.rb", code, &[3, 7, 8, 12]);
    let result = extract("a.rb", code, 8);
    assert!(result.text.starts_with("def foo"));
    assert!(result.text.ends_with("end"));
}

#[test]
fn test_code_on_line_climbs_to_multiline_construct() {
    let code = "\
int f(int a) {
    if (a > 0 &&
        a < 10) {
        return a;
    }
    return 0;
}
";
    let result = extract("f.cpp", code, 2);
    let code_on_line = result.meta.code_on_line.expect("code on line");
    assert!(code_on_line.contains("a > 0 &&"));
    assert!(code_on_line.contains("a < 10"));
}

#[test]
fn test_module_level_line_has_no_function() {
    let code = "VALUE = 42\n\ndef f():\n    return VALUE\n";
    let result = extract("m.py", code, 1);
    assert_eq!(result.outcome, SliceOutcome::FunctionNotFound);
    assert_eq!(result.text, "# Function not found.");
    assert!(result.meta.code_on_line.is_some());
}
