use crate::error::{SiteError, SiteResult};
use crate::scene::model::MeshPart;
use glam::{Mat3, Mat4, Vec3};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
uniform mat4 u_model;
uniform mat4 u_view_projection;
uniform mat3 u_normal_matrix;
out vec3 v_normal;
out vec3 v_world;
void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = normalize(u_normal_matrix * a_normal);
    gl_Position = u_view_projection * world;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec3 v_normal;
in vec3 v_world;
uniform vec4 u_color;
uniform bool u_unlit;
out vec4 frag_color;

const vec3 SUN_DIR = normalize(vec3(5.0, 10.0, 5.0));
const vec3 RED_POS = vec3(-3.0, 3.0, 3.0);
const vec3 BLUE_POS = vec3(3.0, 3.0, 3.0);

void main() {
    if (u_unlit) {
        frag_color = u_color;
        return;
    }
    vec3 n = normalize(v_normal);
    vec3 light = vec3(0.6);
    light += vec3(0.8) * max(dot(n, SUN_DIR), 0.0);
    light += vec3(0.4, 0.0, 0.0) * max(dot(n, normalize(RED_POS - v_world)), 0.0);
    light += vec3(0.0, 0.0, 0.4) * max(dot(n, normalize(BLUE_POS - v_world)), 0.0);
    frag_color = vec4(u_color.rgb * light, u_color.a);
}
"#;

struct GpuMesh {
    vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    index_count: i32,
    color: [f32; 4],
}

#[derive(Clone, Copy)]
enum Attribute {
    Positions,
    Normals,
    Indices,
}

/// Uploads every item or none. On the first failure the items already
/// uploaded go back through `release` and the error is returned.
fn upload_all<I, T, E>(
    items: &[I],
    mut upload: impl FnMut(&I) -> Result<T, E>,
    mut release: impl FnMut(T),
) -> Result<Vec<T>, E> {
    let mut done = Vec::with_capacity(items.len());
    for item in items {
        match upload(item) {
            Ok(uploaded) => done.push(uploaded),
            Err(e) => {
                done.into_iter().for_each(&mut release);
                return Err(e);
            }
        }
    }
    Ok(done)
}

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view_projection: Option<WebGlUniformLocation>,
    normal_matrix: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    unlit: Option<WebGlUniformLocation>,
}

pub struct Renderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    uniforms: Uniforms,
    model: Vec<GpuMesh>,
    marker: Option<GpuMesh>,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> SiteResult<Self> {
        let gl = canvas
            .get_context("webgl2")?
            .ok_or(SiteError::WebGlUnavailable)?
            .dyn_into::<Gl>()
            .map_err(|_| SiteError::WebGlUnavailable)?;

        let vertex = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let uniforms = Uniforms {
            model: gl.get_uniform_location(&program, "u_model"),
            view_projection: gl.get_uniform_location(&program, "u_view_projection"),
            normal_matrix: gl.get_uniform_location(&program, "u_normal_matrix"),
            color: gl.get_uniform_location(&program, "u_color"),
            unlit: gl.get_uniform_location(&program, "u_unlit"),
        };

        gl.enable(Gl::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            gl,
            canvas,
            program,
            uniforms,
            model: Vec::new(),
            marker: None,
        })
    }

    pub fn set_model(&mut self, parts: &[MeshPart]) -> SiteResult<()> {
        self.release_model();
        self.model = upload_all(parts, |part| self.upload(part), |mesh| self.release(mesh))?;
        Ok(())
    }

    pub fn set_marker(&mut self, part: &MeshPart) -> SiteResult<()> {
        if let Some(old) = self.marker.take() {
            self.release(old);
        }
        self.marker = Some(self.upload(part)?);
        Ok(())
    }

    /// Matches the drawing buffer to the element's layout size and returns
    /// the aspect ratio.
    pub fn fit_to_canvas(&self, device_pixel_ratio: f64) -> f32 {
        let ratio = device_pixel_ratio.clamp(1.0, 2.0);
        let width = ((self.canvas.client_width() as f64) * ratio).round().max(1.0) as u32;
        let height = ((self.canvas.client_height() as f64) * ratio).round().max(1.0) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.gl.viewport(0, 0, width as i32, height as i32);
        width as f32 / height as f32
    }

    pub fn draw(&self, view_projection: Mat4, model_matrix: Mat4, marker_at: Option<Vec3>) {
        let gl = &self.gl;
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.view_projection.as_ref(),
            false,
            &view_projection.to_cols_array(),
        );

        gl.uniform1i(self.uniforms.unlit.as_ref(), 0);
        self.set_transform(model_matrix);
        for mesh in &self.model {
            self.draw_mesh(mesh);
        }

        if let (Some(marker), Some(position)) = (&self.marker, marker_at) {
            gl.uniform1i(self.uniforms.unlit.as_ref(), 1);
            self.set_transform(Mat4::from_translation(position));
            self.draw_mesh(marker);
        }
        gl.bind_vertex_array(None);
    }

    fn set_transform(&self, model_matrix: Mat4) {
        let normal = Mat3::from_mat4(model_matrix).inverse().transpose();
        self.gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.model.as_ref(),
            false,
            &model_matrix.to_cols_array(),
        );
        self.gl.uniform_matrix3fv_with_f32_array(
            self.uniforms.normal_matrix.as_ref(),
            false,
            &normal.to_cols_array(),
        );
    }

    fn draw_mesh(&self, mesh: &GpuMesh) {
        self.gl
            .uniform4fv_with_f32_array(self.uniforms.color.as_ref(), &mesh.color);
        self.gl.bind_vertex_array(Some(&mesh.vao));
        self.gl
            .draw_elements_with_i32(Gl::TRIANGLES, mesh.index_count, Gl::UNSIGNED_INT, 0);
    }

    fn upload(&self, part: &MeshPart) -> SiteResult<GpuMesh> {
        let gl = &self.gl;
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| SiteError::Dom("could not create vertex array".into()))?;
        gl.bind_vertex_array(Some(&vao));
        let buffers = upload_all(
            &[Attribute::Positions, Attribute::Normals, Attribute::Indices],
            |attribute| self.attribute_buffer(*attribute, part),
            |buffer| gl.delete_buffer(Some(&buffer)),
        );
        gl.bind_vertex_array(None);

        match buffers {
            Ok(buffers) => Ok(GpuMesh {
                vao,
                buffers,
                index_count: part.indices.len() as i32,
                color: part.color,
            }),
            Err(e) => {
                gl.delete_vertex_array(Some(&vao));
                Err(e)
            }
        }
    }

    fn attribute_buffer(&self, attribute: Attribute, part: &MeshPart) -> SiteResult<WebGlBuffer> {
        match attribute {
            Attribute::Positions => {
                let positions: Vec<f32> = part.positions.iter().flatten().copied().collect();
                self.vertex_buffer(0, &positions)
            }
            Attribute::Normals => {
                let normals: Vec<f32> = part.normals.iter().flatten().copied().collect();
                self.vertex_buffer(1, &normals)
            }
            Attribute::Indices => {
                let buffer = self
                    .gl
                    .create_buffer()
                    .ok_or_else(|| SiteError::Dom("could not create buffer".into()))?;
                self.gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&buffer));
                let indices = js_sys::Uint32Array::from(part.indices.as_slice());
                self.gl.buffer_data_with_array_buffer_view(
                    Gl::ELEMENT_ARRAY_BUFFER,
                    &indices,
                    Gl::STATIC_DRAW,
                );
                Ok(buffer)
            }
        }
    }

    fn vertex_buffer(&self, location: u32, data: &[f32]) -> SiteResult<WebGlBuffer> {
        let gl = &self.gl;
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| SiteError::Dom("could not create buffer".into()))?;
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Float32Array::from(data);
        gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW);
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(location, 3, Gl::FLOAT, false, 0, 0);
        Ok(buffer)
    }

    fn release(&self, mesh: GpuMesh) {
        for buffer in &mesh.buffers {
            self.gl.delete_buffer(Some(buffer));
        }
        self.gl.delete_vertex_array(Some(&mesh.vao));
    }

    fn release_model(&mut self) {
        for mesh in std::mem::take(&mut self.model) {
            self.release(mesh);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.release_model();
        if let Some(marker) = self.marker.take() {
            self.release(marker);
        }
        self.gl.delete_program(Some(&self.program));
    }
}

fn compile_shader(gl: &Gl, kind: u32, source: &str) -> SiteResult<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SiteError::Shader("could not create shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SiteError::Shader(log))
    }
}

fn link_program(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> SiteResult<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| SiteError::Shader("could not create program".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SiteError::Shader(log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn failed_upload_releases_what_was_already_uploaded() {
        let released = RefCell::new(Vec::new());
        let result = upload_all(
            &[1, 2, 3, 4],
            |&n| if n == 3 { Err("context lost") } else { Ok(n * 10) },
            |handle| released.borrow_mut().push(handle),
        );
        assert_eq!(result, Err("context lost"));
        assert_eq!(*released.borrow(), vec![10, 20]);
    }

    #[test]
    fn successful_upload_keeps_everything() {
        let released = RefCell::new(Vec::<i32>::new());
        let result: Result<_, ()> = upload_all(&[1, 2], |&n| Ok(n), |h| released.borrow_mut().push(h));
        assert_eq!(result, Ok(vec![1, 2]));
        assert!(released.borrow().is_empty());
    }

    #[test]
    fn first_failure_releases_nothing() {
        let mut calls = 0;
        let result: Result<Vec<i32>, &str> = upload_all(&[1, 2], |_| Err("no buffer"), |_| calls += 1);
        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
