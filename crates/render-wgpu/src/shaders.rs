/// WGSL shader for the environment-lit mesh.
pub const MESH_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_pos: vec4<f32>,
    base_color: vec4<f32>,
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(1) @binding(0)
var albedo_tex: texture_2d<f32>;
@group(1) @binding(1)
var albedo_samp: sampler;

@group(2) @binding(0)
var env_tex: texture_2d<f32>;
@group(2) @binding(1)
var env_samp: sampler;

const PI: f32 = 3.14159265359;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = globals.model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (globals.model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = globals.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = world_normal;
    out.uv = vertex.uv;
    return out;
}

fn sample_env(dir: vec3<f32>) -> vec3<f32> {
    let d = normalize(dir);
    let u = atan2(d.z, d.x) / (2.0 * PI) + 0.5;
    let v = acos(clamp(d.y, -1.0, 1.0)) / PI;
    return textureSampleLevel(env_tex, env_samp, vec2<f32>(u, v), 0.0).rgb;
}

fn aces_tonemap(x: vec3<f32>) -> vec3<f32> {
    let num = x * (2.51 * x + vec3<f32>(0.03));
    let den = x * (2.43 * x + vec3<f32>(0.59)) + vec3<f32>(0.14);
    return clamp(num / den, vec3<f32>(0.0), vec3<f32>(1.0));
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let v = normalize(globals.camera_pos.xyz - in.world_pos);
    let r = reflect(-v, n);

    let albedo = textureSample(albedo_tex, albedo_samp, in.uv).rgb * globals.base_color.rgb;
    let metal = clamp(globals.params.x, 0.0, 1.0);
    let rough = clamp(globals.params.y, 0.0, 1.0);

    let irradiance = sample_env(n);
    let reflection = sample_env(r);
    // No prefiltered mips: rough surfaces fall back to the irradiance sample.
    let spec_env = mix(reflection, irradiance, rough);
    let f0 = mix(vec3<f32>(0.04), albedo, metal);
    // params.x above 1.0 overdrives the specular term (panel range is 0..5).
    let boost = max(globals.params.x, 1.0);

    let color = albedo * irradiance * (1.0 - metal) + spec_env * f0 * boost;
    return vec4<f32>(aces_tonemap(color), 1.0);
}
"#;

/// WGSL shader for the equirectangular sky background.
pub const SKY_SHADER: &str = r#"
struct SkyGlobals {
    inv_view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> sky: SkyGlobals;

@group(1) @binding(0)
var env_tex: texture_2d<f32>;
@group(1) @binding(1)
var env_samp: sampler;

const PI: f32 = 3.14159265359;

struct SkyOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
};

@vertex
fn vs_sky(@builtin(vertex_index) index: u32) -> SkyOutput {
    // Fullscreen triangle at the far plane.
    let x = f32(index & 1u) * 4.0 - 1.0;
    let y = f32(index & 2u) * 2.0 - 1.0;

    var out: SkyOutput;
    out.clip_position = vec4<f32>(x, y, 1.0, 1.0);
    out.ndc = vec2<f32>(x, y);
    return out;
}

fn sample_env(dir: vec3<f32>) -> vec3<f32> {
    let d = normalize(dir);
    let u = atan2(d.z, d.x) / (2.0 * PI) + 0.5;
    let v = acos(clamp(d.y, -1.0, 1.0)) / PI;
    return textureSampleLevel(env_tex, env_samp, vec2<f32>(u, v), 0.0).rgb;
}

fn aces_tonemap(x: vec3<f32>) -> vec3<f32> {
    let num = x * (2.51 * x + vec3<f32>(0.03));
    let den = x * (2.43 * x + vec3<f32>(0.59)) + vec3<f32>(0.14);
    return clamp(num / den, vec3<f32>(0.0), vec3<f32>(1.0));
}

@fragment
fn fs_sky(in: SkyOutput) -> @location(0) vec4<f32> {
    let near = sky.inv_view_proj * vec4<f32>(in.ndc, 0.0, 1.0);
    let far = sky.inv_view_proj * vec4<f32>(in.ndc, 1.0, 1.0);
    let dir = far.xyz / far.w - near.xyz / near.w;
    return vec4<f32>(aces_tonemap(sample_env(dir)), 1.0);
}
"#;

/// WGSL shader for the axes helper lines.
pub const AXES_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_pos: vec4<f32>,
    base_color: vec4<f32>,
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct AxisVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct AxisOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_axes(vertex: AxisVertex) -> AxisOutput {
    var out: AxisOutput;
    out.clip_position = globals.view_proj * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_axes(in: AxisOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
