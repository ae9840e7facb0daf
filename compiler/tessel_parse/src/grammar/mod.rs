//! Grammar productions.
//!
//! ```text
//! type-annotation := attribute-list? type
//! type            := type-simple ('->' type)?
//! type-simple     := (type-identifier | type-tuple | type-composition)
//!                    ('.' 'metatype')* '?'* array-suffix?
//! type-identifier := component ('.' component)*
//! component       := (identifier | 'This') generic-args?
//! generic-args    := '<' type (',' type)* '>'
//! type-composition:= 'protocol' '<' (type-identifier (',' type-identifier)*)? '>'
//! type-tuple      := '(' (element (',' element)*)? '...'? ')'
//! element         := (binding-name ':')? type-annotation ('=' expr)?
//! array-suffix    := '[' expr? ']' array-suffix?
//! ```
//!
//! A `?` or `[` that starts a new line never attaches to the type before
//! it. `=` defaults and `[expr]` sizes are parsed so that errors point at
//! them, then rejected.

mod attr;
mod expr;
mod probe;
mod ty;

pub use probe::Prober;
pub use ty::GenericArgs;
