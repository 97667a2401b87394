use crate::{
    descriptor::{MethodDescriptor, ParameterDescriptor},
    rebuild::{CallableHandle, CallableParam},
    typesystem::PrimitiveKind,
};

// Helper function to build a handle directly, bypassing the factory seam
pub fn handle(name: &str, params: &[(&str, PrimitiveKind)]) -> CallableHandle {
    let params = params
        .iter()
        .map(|(name, kind)| CallableParam::new(*name, *kind))
        .collect();

    CallableHandle::new(name, params)
}

// Helper function to build a descriptor from raw name/tag pairs, without validation
pub fn descriptor(name: &str, params: &[(&str, &str)]) -> MethodDescriptor {
    MethodDescriptor {
        method_name: name.to_string(),
        parameters: params
            .iter()
            .map(|(name, tag)| ParameterDescriptor {
                parameter_name: (*name).to_string(),
                parameter_type: (*tag).to_string(),
            })
            .collect(),
    }
}
