//! A single conversion: derive the target path and hand both paths to the converter.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::engine::converter::Converter;
use crate::engine::tools::target_path_for;
use crate::error::ConvertError;
use crate::types::{ConversionResult, MatchedFile};

use super::context::PipelineContext;

/// Convert one matched file. Never fails: errors, including a converter panic, end up in
/// [`ConversionResult::error`].
pub fn run_task(
    file: &MatchedFile,
    ctx: &PipelineContext,
    converter: &dyn Converter,
) -> ConversionResult {
    let source = ctx.root.join(&file.rel_path);
    let target = match target_path_for(&source, &ctx.source_ext, &ctx.target_ext) {
        Ok(t) => t,
        Err(e) => {
            return ConversionResult {
                target: source.clone(),
                source,
                error: Some(e),
            };
        }
    };

    let converted = panic::catch_unwind(AssertUnwindSafe(|| converter.convert(&source, &target)));
    let error = match converted {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e),
        Err(payload) => Some(ConvertError::Panicked {
            path: source.clone(),
            msg: panic_message(payload.as_ref()),
        }),
    };
    ConversionResult {
        source,
        target,
        error,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
