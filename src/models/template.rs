// Static file templates written into every generated project

use std::path::{Path, PathBuf};

/// A file the generator writes: its location relative to the project root
/// and its literal contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    /// Path segments below the project root, e.g. `["src", "App.tsx"]`.
    pub segments: &'static [&'static str],
    pub contents: &'static str,
}

impl FileTemplate {
    pub const fn new(segments: &'static [&'static str], contents: &'static str) -> Self {
        Self { segments, contents }
    }

    /// Path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Destination of this template inside `root`.
    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

/// Every file in a generated project, in write order.
pub const FILE_TEMPLATES: [FileTemplate; 6] = [
    FileTemplate::new(&["deno.json"], DENO_CONFIG),
    FileTemplate::new(&["import_map.json"], IMPORT_MAP),
    FileTemplate::new(&["dev.ts"], DEV_SERVER),
    FileTemplate::new(&["index.html"], INDEX_HTML),
    FileTemplate::new(&["src", "main.tsx"], MAIN_TSX),
    FileTemplate::new(&["src", "App.tsx"], APP_TSX),
];

/// Shell command that starts the generated project's dev server.
pub const DEV_TASK_HINT: &str = "deno task dev";

/// deno.json task and import map configuration
pub const DENO_CONFIG: &str = r#"{
  "tasks": {
    "dev": "deno run -A --watch=static/,src/ --unstable dev.ts"
  },
  "importMap": "import_map.json"
}"#;

pub const IMPORT_MAP: &str = r#"{
  "imports": {
    "react": "https://esm.sh/react@18.0.0",
    "react-dom": "https://esm.sh/react-dom@18.0.0"
  }
}"#;

/// Dev server on port 3000 that compiles `src/main.tsx` into `static/` and recompiles on change.
pub const DEV_SERVER: &str = r#"import { serve } from "https://deno.land/std@0.140.0/http/server.ts";
import { compile } from "https://deno.land/x/tsc@v0.9.3/mod.ts";

const PORT = 3000;

async function handler(req: Request): Promise<Response> {
  const url = new URL(req.url);
  let path = "." + url.pathname;
  if (path == "./") path = "./index.html";

  try {
    const file = await Deno.readFile(path);
    const contentType = path.endsWith(".html") ? "text/html" :
                        path.endsWith(".js") ? "application/javascript" :
                        path.endsWith(".css") ? "text/css" :
                        "application/octet-stream";
    return new Response(file, { headers: { "Content-Type": contentType } });
  } catch {
    return new Response("404 Not Found", { status: 404 });
  }
}

async function startServer() {
  console.log("Server running on http://localhost:${PORT}/");
  await serve(handler, { addr: ":" + PORT });
}

async function compileAndWatch() {
  await compile({
    entryPoints: ["./src/main.tsx"],
    outDir: "./static",
    compilerOptions: {
      jsx: "react",
      jsxFactory: "React.createElement",
      jsxFragmentFactory: "React.Fragment",
      target: "es2015",
      module: "esnext"
    }
  });

  const watcher = Deno.watchFs(["./src"]);
  for await (const _ of watcher) {
    console.log("Recompiling...");
    await compile({
      entryPoints: ["./src/main.tsx"],
      outDir: "./static",
      compilerOptions: {
        jsx: "react",
        jsxFactory: "React.createElement",
        jsxFragmentFactory: "React.Fragment",
        target: "es2015",
        module: "esnext"
      }
    });
  }
}

await compileAndWatch();
await startServer();
"#;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Deno React App</title>
</head>
<body>
  <div id="root"></div>
  <script type="module" src="/static/main.js"></script>
</body>
</html>"#;

pub const MAIN_TSX: &str = r#"import React from "react";
import ReactDOM from "react-dom";
import App from "./App.tsx";

ReactDOM.render(<App />, document.getElementById("root"));"#;

/// Starter component.
pub const APP_TSX: &str = r#"import React from "react";

function App() {
  return (
    <div>
      <h1>Hello, Deno with React!</h1>
    </div>
  );
}

export default App;"#;
