use crate::mach::{Event, Runtime};


fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    runtime.run(|event| match event {
        Event::Print(ps) => s.push_str(&format!("{}\n", ps)),
        Event::Error(error) => s.push_str(&format!("?{}\n", error)),
        Event::Stopped | Event::Running => {}
    });
    s
}

fn runtime(lines: &[&str]) -> Runtime {
    Runtime::new(lines.to_vec())
}
