use super::{GlContext, GlError, MeshType, ShaderStage};
use crate::constants::QUAD_COMPONENTS;
use crate::uniforms::{UniformKind, UniformRegistry, UniformValue};
use fnv::FnvHashMap;

/// Uniform name -> resolved GPU location. Filled once at initialization.
pub struct UniformLocations<L> {
    map: FnvHashMap<String, L>,
}

impl<L> UniformLocations<L> {
    pub fn get(&self, name: &str) -> Option<&L> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

/// A linked program, its uniform locations and the static quad buffer.
pub struct GlPipeline<G: GlContext> {
    program: G::Program,
    quad: G::Buffer,
    mesh: MeshType,
    locations: UniformLocations<G::Location>,
}

impl<G: GlContext> GlPipeline<G> {
    /// Compile, link, resolve locations and upload the quad.
    ///
    /// Any failure is fatal: intermediate GL objects are deleted and no
    /// program is returned, so the render path stays disabled.
    pub fn initialize(
        gl: &G,
        vertex_source: &str,
        fragment_source: &str,
        mesh: MeshType,
        position_attribute: &str,
        registry: &UniformRegistry,
    ) -> Result<Self, GlError> {
        let vs = gl
            .compile_shader(ShaderStage::Vertex, vertex_source)
            .map_err(|log| GlError::Compile {
                stage: ShaderStage::Vertex,
                log,
            })?;
        let fs = match gl.compile_shader(ShaderStage::Fragment, fragment_source) {
            Ok(fs) => fs,
            Err(log) => {
                gl.delete_shader(&vs);
                return Err(GlError::Compile {
                    stage: ShaderStage::Fragment,
                    log,
                });
            }
        };
        let linked = gl.link_program(&vs, &fs);
        // Stages are owned by the program once linked.
        gl.delete_shader(&vs);
        gl.delete_shader(&fs);
        let program = linked.map_err(GlError::Link)?;
        gl.use_program(&program);

        let mut map = FnvHashMap::default();
        for name in registry.names() {
            match gl.uniform_location(&program, name) {
                Some(loc) => {
                    map.insert(name.to_string(), loc);
                }
                None => log::debug!("[gl] uniform `{}` not active in program; skipped", name),
            }
        }

        let quad = match gl.upload_vertex_buffer(bytemuck::cast_slice(mesh.vertices())) {
            Ok(b) => b,
            Err(e) => {
                gl.delete_program(&program);
                return Err(GlError::Geometry(e));
            }
        };
        if !gl.bind_float_attribute(&program, position_attribute, QUAD_COMPONENTS) {
            log::warn!("[gl] attribute `{}` not found; quad is unbound", position_attribute);
        }

        log::info!(
            "[gl] program linked; {}/{} uniforms resolved",
            map.len(),
            registry.len()
        );
        Ok(Self {
            program,
            quad,
            mesh,
            locations: UniformLocations { map },
        })
    }

    pub fn locations(&self) -> &UniformLocations<G::Location> {
        &self.locations
    }

    pub fn vertex_count(&self) -> i32 {
        self.mesh.vertices().len() as i32
    }

    /// Push every descriptor that has a location; others are skipped.
    ///
    /// The upload call follows the declared kind. A value that does not
    /// match it is not sent.
    pub fn upload_uniforms(&self, gl: &G, registry: &UniformRegistry) {
        for d in registry.iter() {
            let Some(loc) = self.locations.get(&d.name) else {
                continue;
            };
            match (d.kind, d.value) {
                (UniformKind::Float1, UniformValue::Float(x)) => gl.uniform1f(loc, x),
                (UniformKind::Int1, UniformValue::Int(x)) => gl.uniform1i(loc, x),
                (UniformKind::Vec2, UniformValue::Vec2(v)) => gl.uniform2f(loc, v.x, v.y),
                (UniformKind::Vec3, UniformValue::Vec3(v)) => gl.uniform3f(loc, v.x, v.y, v.z),
                (UniformKind::Vec4, UniformValue::Vec4(v)) => gl.uniform4f(loc, v.x, v.y, v.z, v.w),
                (kind, value) => log::debug!(
                    "[gl] uniform `{}` declared {} but holds {}; skipped",
                    d.name,
                    kind,
                    value.kind()
                ),
            }
        }
    }

    /// Teardown hook: delete the program and the quad buffer.
    pub fn release(self, gl: &G) {
        gl.delete_buffer(&self.quad);
        gl.delete_program(&self.program);
        log::info!("[gl] pipeline released");
    }
}
