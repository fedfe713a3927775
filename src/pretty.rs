use crate::parser::ast::*;

/// Render the indented node dump: one node per line, two spaces per level.
pub fn render_tree(program: &Program) -> String {
    let mut tp = TreePrinter::new();
    tp.node_program(program);
    tp.buf
}

/// Pretty-print a `Program` AST back into valid source text.
pub fn pretty_print(program: &Program) -> String {
    let mut pp = PrettyPrinter::new();
    pp.emit_program(program);
    pp.buf
}

// ── Tree dump ────────────────────────────────────────────────────────

struct TreePrinter {
    buf: String,
    depth: usize,
}

impl TreePrinter {
    fn new() -> Self {
        Self { buf: String::new(), depth: 0 }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn node_program(&mut self, program: &Program) {
        self.line("Program");
        self.nested(|tp| {
            for class in &program.classes {
                tp.node_class(class);
            }
        });
    }

    fn node_class(&mut self, class: &Class) {
        self.line(&format!("Class({})", class.name));
        self.nested(|tp| {
            for feature in &class.features {
                tp.node_feature(feature);
            }
        });
    }

    fn node_feature(&mut self, feature: &Feature) {
        let (name, ty) = (feature.name(), feature.declared_type());
        match feature {
            Feature::Attribute { .. } => self.line(&format!("Attr({name}, {ty})")),
            Feature::Method { body, .. } => {
                self.line(&format!("Method({name}, {ty})"));
                self.nested(|tp| tp.node_expr(body));
            }
        }
    }

    /// Preorder walk over an explicit stack of `(depth, node)` pairs.
    fn node_expr(&mut self, root: &Expr) {
        let base = self.depth;
        let mut stack = vec![(base, root)];
        while let Some((depth, expr)) = stack.pop() {
            self.depth = depth;
            match expr {
                Expr::Number(n) => self.line(&format!("Number({n})")),
                Expr::Identifier(name) => self.line(&format!("Id({name})")),
                Expr::StringLiteral(value) => self.line(&format!("String({value})")),
                Expr::BinaryOp { op, left, right } => {
                    self.line(&format!("BinOp({op})"));
                    stack.push((depth + 1, right.as_ref()));
                    stack.push((depth + 1, left.as_ref()));
                }
                Expr::Block(exprs) => {
                    self.line("Block");
                    stack.extend(exprs.iter().rev().map(|e| (depth + 1, e)));
                }
                Expr::Call { callee, args } => {
                    self.line(&format!("Call({callee})"));
                    stack.extend(args.iter().rev().map(|e| (depth + 1, e)));
                }
            }
        }
        self.depth = base;
    }
}

// ── Source printer ───────────────────────────────────────────────────

struct PrettyPrinter {
    buf: String,
    indent: usize,
}

impl PrettyPrinter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.buf.push_str("    ");
        }
    }

    fn emit_program(&mut self, program: &Program) {
        for (i, class) in program.classes.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.emit_class(class);
        }
    }

    fn emit_class(&mut self, class: &Class) {
        self.write("class ");
        self.write(&class.name);
        self.write(" {");
        self.newline();
        self.indent += 1;
        for feature in &class.features {
            self.write_indent();
            self.emit_feature(feature);
            self.newline();
        }
        self.indent -= 1;
        self.write("};");
        self.newline();
    }

    fn emit_feature(&mut self, feature: &Feature) {
        match feature {
            Feature::Attribute { name, declared_type } => {
                self.write(&format!("{name} : {declared_type};"));
            }
            Feature::Method { name, params, declared_type, body } => {
                self.write(name);
                self.write("(");
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(&format!("{} : {}", p.name, p.declared_type));
                }
                self.write(&format!(") : {declared_type} {{ "));
                self.emit_expr(body);
                self.write(" };");
            }
        }
    }

    /// Emit `root` with a work stack of pending pieces, pushed in reverse.
    /// Operators binding looser than the surrounding context are parenthesized.
    fn emit_expr(&mut self, root: &Expr) {
        let mut work = vec![Piece::Expr(root, 0)];
        while let Some(piece) = work.pop() {
            let (expr, parent_prec) = match piece {
                Piece::Text(text) => {
                    self.write(text);
                    continue;
                }
                Piece::Expr(expr, parent_prec) => (expr, parent_prec),
            };
            match expr {
                Expr::Number(n) => self.write(&n.to_string()),
                Expr::Identifier(name) => self.write(name),
                Expr::StringLiteral(value) => {
                    self.write("\"");
                    self.write(&escape_string(value));
                    self.write("\"");
                }
                Expr::BinaryOp { op, left, right } => {
                    let prec = op.precedence();
                    let need_parens = prec < parent_prec;
                    if need_parens {
                        work.push(Piece::Text(")"));
                    }
                    // Right child at prec + 1: same-precedence operators on the right need parens.
                    work.push(Piece::Expr(right, prec + 1));
                    work.push(Piece::Text(op.padded()));
                    work.push(Piece::Expr(left, prec));
                    if need_parens {
                        self.write("(");
                    }
                }
                Expr::Block(exprs) => {
                    if exprs.is_empty() {
                        self.write("{}");
                        continue;
                    }
                    self.write("{ ");
                    work.push(Piece::Text(" }"));
                    push_separated(&mut work, exprs, "; ");
                }
                Expr::Call { callee, args } => {
                    self.write(callee);
                    self.write("(");
                    work.push(Piece::Text(")"));
                    push_separated(&mut work, args, ", ");
                }
            }
        }
    }
}

enum Piece<'a> {
    Expr(&'a Expr, u8),
    Text(&'a str),
}

/// Queue `exprs` joined by `sep` so they pop in source order.
fn push_separated<'a>(work: &mut Vec<Piece<'a>>, exprs: &'a [Expr], sep: &'a str) {
    for (i, e) in exprs.iter().enumerate().rev() {
        work.push(Piece::Expr(e, 0));
        if i > 0 {
            work.push(Piece::Text(sep));
        }
    }
}

/// Backslash-escape the two characters a string literal cannot hold verbatim.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
