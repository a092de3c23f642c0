use synclog::{prefix, set_destination, set_prefixes};

fn main() {
    let file = std::fs::File::create("/tmp/synclog_demo.log").expect("unable to open log file");
    set_destination(Some(Box::new(file)));
    set_prefixes(vec![prefix(|| {
        chrono::Local::now().format("%d-%m-%Y %X ").to_string()
    })]);

    synclog::debug!("Line {}", 1);
    synclog::info!("Line {}", 2);
    synclog::warning!("Pi = ").write(std::f64::consts::PI);
    synclog::error!("Divide by zero");

    let handles: Vec<_> = (0..5)
        .map(|worker| {
            std::thread::spawn(move || {
                for seq in 0..10 {
                    synclog::info!("worker {worker} message {seq}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    synclog::critical!("Line End");
    println!("wrote /tmp/synclog_demo.log");
}
