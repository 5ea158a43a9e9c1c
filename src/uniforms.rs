//! Named shader uniforms and the registry that holds their current values.
//!
//! The registry is plain data: it knows nothing about GPU handles. The GL
//! pipeline resolves one location per registered name and the render step
//! uploads `value` through the function matching `kind`.

use crate::constants::{DEFAULT_MOUSE, DEFAULT_RESOLUTION, MOUSE_UNIFORM, RESOLUTION_UNIFORM, TIME_UNIFORM};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3, Vec4};
use std::fmt;
use thiserror::Error;

/// Semantic kind of a uniform; selects the GL upload function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniformKind {
    Float1,
    Int1,
    Vec2,
    Vec3,
    Vec4,
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UniformKind::Float1 => "float",
            UniformKind::Int1 => "int",
            UniformKind::Vec2 => "vec2",
            UniformKind::Vec3 => "vec3",
            UniformKind::Vec4 => "vec4",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl UniformValue {
    #[inline]
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float1,
            UniformValue::Int(_) => UniformKind::Int1,
            UniformValue::Vec2(_) => UniformKind::Vec2,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Vec4(_) => UniformKind::Vec4,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            UniformValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UniformError {
    #[error("unknown uniform `{0}`")]
    Unknown(String),
    #[error("uniform `{0}` is owned by the render pipeline and cannot be written")]
    Readonly(String),
    #[error("uniform `{name}` is declared as {expected} but got {found}")]
    KindMismatch {
        name: String,
        expected: UniformKind,
        found: UniformKind,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct UniformDescriptor {
    pub name: String,
    pub kind: UniformKind,
    pub value: UniformValue,
    pub default_value: UniformValue,
    pub readonly: bool,
}

impl UniformDescriptor {
    /// Writable descriptor whose value starts at `default_value`.
    pub fn new(name: impl Into<String>, default_value: UniformValue) -> Self {
        Self {
            name: name.into(),
            kind: default_value.kind(),
            value: default_value,
            default_value,
            readonly: false,
        }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn check_kind(&self, value: &UniformValue) -> Result<(), UniformError> {
        if value.kind() != self.kind {
            return Err(UniformError::KindMismatch {
                name: self.name.clone(),
                expected: self.kind,
                found: value.kind(),
            });
        }
        Ok(())
    }
}

/// Resolution, time and pointer: the pipeline-owned uniforms every shader gets.
pub fn base_uniforms() -> Vec<UniformDescriptor> {
    vec![
        UniformDescriptor::new(RESOLUTION_UNIFORM, UniformValue::Vec2(Vec2::from(DEFAULT_RESOLUTION)))
            .readonly(),
        UniformDescriptor::new(TIME_UNIFORM, UniformValue::Float(0.0)).readonly(),
        UniformDescriptor::new(MOUSE_UNIFORM, UniformValue::Vec2(Vec2::from(DEFAULT_MOUSE))).readonly(),
    ]
}

#[derive(Clone, Debug, Default)]
pub struct UniformRegistry {
    entries: FnvHashMap<String, UniformDescriptor>,
}

impl UniformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base uniforms merged with `extra`; later entries replace earlier ones
    /// sharing the same name.
    pub fn with_base(extra: impl IntoIterator<Item = UniformDescriptor>) -> Self {
        let mut registry = Self::new();
        for d in base_uniforms().into_iter().chain(extra) {
            registry.insert(d);
        }
        registry
    }

    /// Insert or replace a descriptor by name.
    pub fn insert(&mut self, descriptor: UniformDescriptor) {
        if let Some(prev) = self.entries.insert(descriptor.name.clone(), descriptor) {
            log::debug!("[uniforms] overriding `{}`", prev.name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformDescriptor> {
        self.entries.get(name)
    }

    pub fn value(&self, name: &str) -> Option<UniformValue> {
        self.entries.get(name).map(|d| d.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UniformDescriptor> {
        self.entries.values()
    }

    /// Write from outside the pipeline. Rejects readonly descriptors.
    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        let d = self
            .entries
            .get_mut(name)
            .ok_or_else(|| UniformError::Unknown(name.to_string()))?;
        if d.readonly {
            return Err(UniformError::Readonly(name.to_string()));
        }
        d.check_kind(&value)?;
        d.value = value;
        Ok(())
    }

    /// Pipeline-owned write (time, pointer, resolution). Ignores `readonly`;
    /// a name that is not registered is skipped.
    pub(crate) fn set_owned(&mut self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        match self.entries.get_mut(name) {
            Some(d) => {
                d.check_kind(&value)?;
                d.value = value;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Restore every descriptor to its default value.
    pub fn reset(&mut self) {
        for d in self.entries.values_mut() {
            d.value = d.default_value;
        }
    }
}
