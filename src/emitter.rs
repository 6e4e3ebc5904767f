//! TypeScript rendering of the route table.
//!
//! The generated module imports every handler file as a namespace and exports a
//! single object keyed by route:
//!
//! ```text
//! import { HandlerModule } from './lib/request_types';
//! import * as indexTs from './routes/index';
//! import * as usersGetTs from './routes/users/get';
//!
//! const routes: { [pathname: string]: HandlerModule } = {
//!     '/': indexTs,
//!     '/users/get': usersGetTs,
//! };
//!
//! export default routes;
//! ```

use crate::table::RouteTable;
use crate::transform::normalize_path;
use log::debug;
use std::path::Path;

/// Source file suffixes removed from import paths.
pub const SOURCE_SUFFIXES: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Renders a [`RouteTable`] as a TypeScript module.
#[derive(Debug, Clone)]
pub struct TypeScriptEmitter {
    /// Type of each table value, e.g. `HandlerModule`
    pub handler_type: String,
    /// Module the handler type is imported from
    pub handler_import: String,
    /// Name of the exported table constant
    pub table_name: String,
    /// Directory of the generated file; import paths are made relative to it
    pub output_dir: String,
    /// Directory relative paths are resolved against before comparing them
    pub base_dir: Option<String>,
}

impl Default for TypeScriptEmitter {
    fn default() -> Self {
        Self {
            handler_type: "HandlerModule".to_string(),
            handler_import: "./lib/request_types".to_string(),
            table_name: "routes".to_string(),
            output_dir: "src".to_string(),
            base_dir: None,
        }
    }
}

impl TypeScriptEmitter {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_handler_type(mut self, handler_type: impl Into<String>) -> Self {
        self.handler_type = handler_type.into();
        self
    }

    pub fn with_handler_import(mut self, handler_import: impl Into<String>) -> Self {
        self.handler_import = handler_import.into();
        self
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Resolves relative handler and output paths against `base_dir`, so an absolute
    /// routes root can be combined with a relative output path and the other way round.
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Renders the whole module.
    ///
    /// Route keys and identifiers are written verbatim; nothing is escaped or checked.
    pub fn render(&self, table: &RouteTable) -> String {
        let imports: Vec<String> = table
            .entries
            .iter()
            .map(|entry| {
                let path = self.import_path(&entry.file);
                debug!("Importing {} as {}", path, entry.module);
                format!("import * as {} from '{}';\n", entry.module, path)
            })
            .collect();

        let lines: Vec<String> = table
            .entries
            .iter()
            .map(|entry| format!("'{}': {},", entry.route, entry.module))
            .collect();

        let mut out = format!(
            "import {{ {} }} from '{}';\n",
            self.handler_type, self.handler_import
        );
        out.push_str(&imports.concat());
        out.push_str(&format!(
            "\nconst {}: {{ [pathname: string]: {} }} = {{\n\t",
            self.table_name, self.handler_type
        ));
        out.push_str(&lines.join("\n\t"));
        out.push_str(&format!("\n}};\n\nexport default {};\n", self.table_name));

        out
    }

    /// Import specifier for a handler file, relative to the generated module.
    pub fn import_path(&self, file: &str) -> String {
        let file = SOURCE_SUFFIXES
            .iter()
            .find_map(|suffix| file.strip_suffix(suffix))
            .unwrap_or(file);
        relative_path(&self.resolve(file), &self.resolve(&self.output_dir))
    }

    fn resolve(&self, path: &str) -> String {
        match &self.base_dir {
            Some(base) if !Path::new(path).is_absolute() => {
                normalize_path(&format!("{}/{}", base, path))
            }
            Some(_) => normalize_path(path),
            None => path.to_string(),
        }
    }
}

/// Expresses `file` relative to `from_dir` as a module specifier (`./a/b` or `../a/b`).
///
/// Both paths must be `/`-separated and either both relative to the same directory
/// or both absolute; [`TypeScriptEmitter::with_base_dir`] takes care of mixed input.
pub fn relative_path(file: &str, from_dir: &str) -> String {
    let file_parts: Vec<&str> = components(file);
    let dir_parts: Vec<&str> = components(from_dir);

    let common = file_parts
        .iter()
        .zip(&dir_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; dir_parts.len() - common];
    parts.extend(&file_parts[common..]);

    if dir_parts.len() == common {
        format!("./{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}

fn components(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RouteTable;

    fn table(paths: &[&str]) -> RouteTable {
        let files: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        RouteTable::build("src/routes", &files)
    }

    #[test]
    fn test_render_three_routes() {
        let emitter = TypeScriptEmitter::default();
        let output = emitter.render(&table(&[
            "src/routes/index.ts",
            "src/routes/users/get.ts",
            "src/routes/users/post.ts",
        ]));

        let expected = "import { HandlerModule } from './lib/request_types';\n\
import * as indexTs from './routes/index';\n\
import * as usersGetTs from './routes/users/get';\n\
import * as usersPostTs from './routes/users/post';\n\
\n\
const routes: { [pathname: string]: HandlerModule } = {\n\
\t'/': indexTs,\n\
\t'/users/get': usersGetTs,\n\
\t'/users/post': usersPostTs,\n\
};\n\
\n\
export default routes;\n";

        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_empty_table() {
        let output = TypeScriptEmitter::default().render(&table(&[]));

        assert_eq!(
            output,
            "import { HandlerModule } from './lib/request_types';\n\
\n\
const routes: { [pathname: string]: HandlerModule } = {\n\
\t\n\
};\n\
\n\
export default routes;\n"
        );
    }

    #[test]
    fn test_render_custom_names() {
        let emitter = TypeScriptEmitter::new("src")
            .with_handler_type("Handler")
            .with_handler_import("./types")
            .with_table_name("dispatch");
        let output = emitter.render(&table(&["src/routes/logs.ts"]));

        assert!(output.starts_with("import { Handler } from './types';\n"));
        assert!(output.contains("const dispatch: { [pathname: string]: Handler } = {\n\t'/logs': logsTs,\n};"));
        assert!(output.ends_with("export default dispatch;\n"));
    }

    #[test]
    fn test_import_path_strips_known_suffixes() {
        let emitter = TypeScriptEmitter::default();
        assert_eq!(emitter.import_path("src/routes/a.ts"), "./routes/a");
        assert_eq!(emitter.import_path("src/routes/a.tsx"), "./routes/a");
        assert_eq!(emitter.import_path("src/routes/a.js"), "./routes/a");
        assert_eq!(emitter.import_path("src/routes/a.get.ts"), "./routes/a.get");
        assert_eq!(emitter.import_path("src/routes/README.md"), "./routes/README.md");
    }

    #[test]
    #[cfg(unix)]
    fn test_import_path_with_absolute_routes_and_relative_output() {
        let emitter = TypeScriptEmitter::new("src").with_base_dir("/work/project");
        assert_eq!(
            emitter.import_path("/work/project/src/routes/index.ts"),
            "./routes/index"
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_import_path_with_relative_routes_and_absolute_output() {
        let emitter = TypeScriptEmitter::new("/work/project/gen").with_base_dir("/work/project");
        assert_eq!(
            emitter.import_path("src/routes/users/get.ts"),
            "../src/routes/users/get"
        );
    }

    #[test]
    fn test_import_path_with_base_dir_keeps_relative_layout() {
        let emitter = TypeScriptEmitter::new("./src").with_base_dir("/work/project");
        assert_eq!(emitter.import_path("src/routes/a.ts"), "./routes/a");

        let emitter = TypeScriptEmitter::new("out/../src").with_base_dir("/work/project");
        assert_eq!(emitter.import_path("src/routes/a.ts"), "./routes/a");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path("src/routes/a", "src"), "./routes/a");
        assert_eq!(relative_path("src/routes/a", ""), "./src/routes/a");
        assert_eq!(relative_path("src/routes/a", "."), "./src/routes/a");
        assert_eq!(relative_path("src/routes/a", "gen/out"), "../../src/routes/a");
        assert_eq!(relative_path("src/routes/a", "src/lib"), "../routes/a");
        assert_eq!(
            relative_path("/tmp/p/src/routes/a", "/tmp/p/src"),
            "./routes/a"
        );
    }
}
