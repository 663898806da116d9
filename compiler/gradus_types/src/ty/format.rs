//! Rendering types in signature syntax.

use gradus_ir::{Literal, StringInterner, TypeName};

use super::{FlowMarker, Type};
use crate::params::Params;

impl Type {
    /// Format the type the way it would be written in a signature.
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        write_type(&mut out, self, interner);
        out
    }
}

impl Params {
    /// Format as `(A, ?B, *C, k: D, ?l: E, **F)`.
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        write_params(&mut out, self, interner);
        out
    }
}

fn write_type(out: &mut String, ty: &Type, interner: &StringInterner) {
    match ty {
        Type::Any => out.push_str("untyped"),
        Type::ClassLiteral => out.push_str("class"),
        Type::InstanceSelf => out.push_str("instance"),
        Type::SelfRef => out.push_str("self"),
        Type::Top => out.push_str("top"),
        Type::Bottom => out.push_str("bot"),
        Type::Boolean => out.push_str("bool"),
        Type::Void => out.push_str("void"),
        Type::Nil => out.push_str("nil"),
        Type::Var(name) => out.push_str(interner.lookup(*name)),
        Type::Singleton(name) => {
            out.push_str("singleton(");
            out.push_str(&name.display(interner));
            out.push(')');
        }
        Type::Instance { name, args }
        | Type::Interface { name, args }
        | Type::Alias { name, args } => write_applied(out, name, args, interner),
        Type::Union(members) => write_joined(out, members, " | ", interner),
        Type::Intersection(members) => write_joined(out, members, " & ", interner),
        Type::Literal(literal) => out.push_str(&literal.display(interner)),
        Type::Tuple(members) => {
            out.push('[');
            write_list(out, members, interner);
            out.push(']');
        }
        Type::Record(fields) => {
            out.push_str("{ ");
            for (i, (key, value)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                match key {
                    Literal::Symbol(name) => {
                        out.push_str(interner.lookup(*name));
                        out.push_str(": ");
                    }
                    other => {
                        out.push_str(&other.display(interner));
                        out.push_str(" => ");
                    }
                }
                write_type(out, value, interner);
            }
            out.push_str(" }");
        }
        Type::Proc(proc) => {
            out.push('^');
            write_params(out, &proc.params, interner);
            out.push_str(" -> ");
            write_type(out, &proc.return_type, interner);
        }
        Type::Logic(marker) => {
            out.push_str(match marker {
                FlowMarker::ReceiverIsArg => "bool(receiver is arg)",
                FlowMarker::ReceiverIsNil => "bool(receiver is nil)",
                FlowMarker::Not => "bool(not receiver)",
                FlowMarker::ArgIsReceiver => "bool(arg is receiver)",
            });
        }
    }
}

fn write_applied(out: &mut String, name: &TypeName, args: &[Type], interner: &StringInterner) {
    out.push_str(&name.display(interner));
    if !args.is_empty() {
        out.push('[');
        write_list(out, args, interner);
        out.push(']');
    }
}

fn write_list(out: &mut String, types: &[Type], interner: &StringInterner) {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_type(out, ty, interner);
    }
}

fn write_joined(out: &mut String, types: &[Type], sep: &str, interner: &StringInterner) {
    out.push('(');
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        write_type(out, ty, interner);
    }
    out.push(')');
}

fn write_params(out: &mut String, params: &Params, interner: &StringInterner) {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(params.required.iter().map(|t| t.display(interner)));
    parts.extend(params.optional.iter().map(|t| format!("?{}", t.display(interner))));
    if let Some(rest) = &params.rest {
        parts.push(format!("*{}", rest.display(interner)));
    }
    parts.extend(
        params
            .required_keywords
            .iter()
            .map(|(k, t)| format!("{}: {}", interner.lookup(*k), t.display(interner))),
    );
    parts.extend(
        params
            .optional_keywords
            .iter()
            .map(|(k, t)| format!("?{}: {}", interner.lookup(*k), t.display(interner))),
    );
    if let Some(rest) = &params.rest_keywords {
        parts.push(format!("**{}", rest.display(interner)));
    }
    out.push('(');
    out.push_str(&parts.join(", "));
    out.push(')');
}
