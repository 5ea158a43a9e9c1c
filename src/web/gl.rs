use crate::gl::{DrawMode, GlContext, ShaderStage};
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation};

/// `GlContext` backed by a browser WebGL 1 context.
pub struct WebGl {
    gl: GL,
}

impl WebGl {
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }
}

impl GlContext for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Location = WebGlUniformLocation;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, String> {
        let kind = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or_else(|| "unable to create shader object".to_string())?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        let ok = self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(shader)
        } else {
            let log = self
                .gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| "unknown error".to_string());
            self.gl.delete_shader(Some(&shader));
            Err(log)
        }
    }

    fn link_program(&self, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, String> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| "unable to create program object".to_string())?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);
        let ok = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(program)
        } else {
            let log = self
                .gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| "unknown error".to_string());
            self.gl.delete_program(Some(&program));
            Err(log)
        }
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn upload_vertex_buffer(&self, data: &[u8]) -> Result<WebGlBuffer, String> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or_else(|| "unable to create buffer".to_string())?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        self.gl
            .buffer_data_with_u8_array(GL::ARRAY_BUFFER, data, GL::STATIC_DRAW);
        Ok(buffer)
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        self.gl.delete_buffer(Some(buffer));
    }

    fn bind_float_attribute(&self, program: &WebGlProgram, name: &str, components: i32) -> bool {
        let loc = self.gl.get_attrib_location(program, name);
        if loc < 0 {
            return false;
        }
        let loc = loc as u32;
        self.gl.enable_vertex_attrib_array(loc);
        self.gl
            .vertex_attrib_pointer_with_i32(loc, components, GL::FLOAT, false, 0, 0);
        true
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }

    fn uniform1f(&self, location: &WebGlUniformLocation, x: f32) {
        self.gl.uniform1f(Some(location), x);
    }

    fn uniform1i(&self, location: &WebGlUniformLocation, x: i32) {
        self.gl.uniform1i(Some(location), x);
    }

    fn uniform2f(&self, location: &WebGlUniformLocation, x: f32, y: f32) {
        self.gl.uniform2f(Some(location), x, y);
    }

    fn uniform3f(&self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32) {
        self.gl.uniform3f(Some(location), x, y, z);
    }

    fn uniform4f(&self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.gl.uniform4f(Some(location), x, y, z, w);
    }

    fn active_texture(&self, unit: u32) {
        self.gl.active_texture(GL::TEXTURE0 + unit);
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        let mode = match mode {
            DrawMode::TriangleStrip => GL::TRIANGLE_STRIP,
        };
        self.gl.draw_arrays(mode, first, count);
    }
}
