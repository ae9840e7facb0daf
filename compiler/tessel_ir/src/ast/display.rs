//! Canonical source rendering of type nodes.

use std::fmt::{self, Write};

use super::{TypeArena, TypeReprId, TypeReprKind};
use crate::StringInterner;

impl TypeArena {
    /// Render a type in canonical source form.
    ///
    /// Nested function types are parenthesized so associativity is
    /// visible: `A -> B -> C` renders as `A -> (B -> C)`.
    pub fn display(&self, id: TypeReprId, interner: &StringInterner) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = TypePrinter {
            arena: self,
            interner,
        }
        .write(&mut out, id);
        out
    }
}

struct TypePrinter<'a> {
    arena: &'a TypeArena,
    interner: &'a StringInterner,
}

impl TypePrinter<'_> {
    fn write(&self, out: &mut String, id: TypeReprId) -> fmt::Result {
        match &self.arena.get(id).kind {
            TypeReprKind::Ident(ident) => {
                for (i, component) in ident.components().iter().enumerate() {
                    if i > 0 {
                        out.push('.');
                    }
                    out.push_str(self.interner.lookup(component.name));
                    if component.angles.is_some() {
                        out.push('<');
                        self.write_list(out, &component.generic_args)?;
                        out.push('>');
                    }
                }
            }
            TypeReprKind::Tuple(tuple) => {
                out.push('(');
                for (i, element) in tuple.elements().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if let Some((label, _)) = element.label {
                        write!(out, "{}: ", self.interner.lookup(label))?;
                    }
                    self.write(out, element.ty)?;
                }
                if tuple.has_ellipsis() {
                    out.push_str("...");
                }
                out.push(')');
            }
            TypeReprKind::Function { input, output } => {
                self.write_operand(out, *input)?;
                out.push_str(" -> ");
                self.write_operand(out, *output)?;
            }
            TypeReprKind::Array { base, size, .. } => {
                self.write(out, *base)?;
                out.push_str(if size.is_some() { "[_]" } else { "[]" });
            }
            TypeReprKind::Optional { base, .. } => {
                self.write(out, *base)?;
                out.push('?');
            }
            TypeReprKind::ProtocolComposition { protocols, .. } => {
                out.push_str("protocol<");
                self.write_list(out, protocols)?;
                out.push('>');
            }
            TypeReprKind::MetaType { base, .. } => {
                self.write(out, *base)?;
                out.push_str(".metatype");
            }
            TypeReprKind::Attributed { attrs, base } => {
                out.push('[');
                for (i, attr) in attrs.attrs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(self.interner.lookup(attr.name));
                    if attr.args.is_some() {
                        out.push_str("(...)");
                    }
                }
                out.push_str("] ");
                self.write(out, *base)?;
            }
        }
        Ok(())
    }

    fn write_operand(&self, out: &mut String, id: TypeReprId) -> fmt::Result {
        if matches!(self.arena.get(id).kind, TypeReprKind::Function { .. }) {
            out.push('(');
            self.write(out, id)?;
            out.push(')');
            Ok(())
        } else {
            self.write(out, id)
        }
    }

    fn write_list(&self, out: &mut String, ids: &[TypeReprId]) -> fmt::Result {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write(out, *id)?;
        }
        Ok(())
    }
}
