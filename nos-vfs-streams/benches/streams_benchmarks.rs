//! Streams driver benchmarks

use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nos_vfs_api::{Driver, OpenMode};
use nos_vfs_streams::{LoopbackStream, NullStream, StreamBinding, StreamsDriver};

fn bench_open_close_file(c: &mut Criterion) {
    let null = NullStream;
    let table = [
        StreamBinding::new("console", &null),
        StreamBinding::new("log", &null),
        StreamBinding::new("gps", &null),
        StreamBinding::new("modem", &null),
    ];
    let drv: StreamsDriver<'_, 1, 8> = StreamsDriver::new("streams", &table);
    c.bench_function("streams_open_close_file", |b| {
        b.iter(|| {
            let file = drv.open_file(black_box("/modem"), OpenMode::RDWR).unwrap();
            file.close();
        })
    });
}

fn bench_open_missing(c: &mut Criterion) {
    let null = NullStream;
    let table = [StreamBinding::new("console", &null)];
    let drv: StreamsDriver<'_, 1, 1> = StreamsDriver::new("streams", &table);
    c.bench_function("streams_open_missing", |b| {
        b.iter(|| black_box(drv.open_file(black_box("debug"), OpenMode::READ).is_err()))
    });
}

fn bench_enumerate(c: &mut Criterion) {
    let null = NullStream;
    let names = ["tty0", "tty1", "tty2", "tty3", "uart0", "uart1", "log", "null"];
    let table = names.map(|name| StreamBinding::new(name, &null));
    let drv: StreamsDriver<'_, 1, 1> = StreamsDriver::new("streams", &table);
    c.bench_function("streams_enumerate_root", |b| {
        b.iter(|| {
            let dir = drv.open_directory("").unwrap();
            let mut count = 0;
            while let Some(entry) = dir.next().unwrap() {
                count += entry.name.len();
            }
            black_box(count)
        })
    });
}

fn bench_loopback_io(c: &mut Criterion) {
    let lo = LoopbackStream::<256>::new();
    let table = [StreamBinding::new("lo", &lo)];
    let drv: StreamsDriver<'_, 1, 1> = StreamsDriver::new("streams", &table);
    let file = drv.open_file("lo", OpenMode::RDWR).unwrap();
    let mut buf = [0u8; 64];
    c.bench_function("streams_loopback_write_read_64", |b| {
        b.iter(|| {
            file.write(black_box(&[0x5a; 64])).unwrap();
            black_box(file.read(&mut buf).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_open_close_file,
    bench_open_missing,
    bench_enumerate,
    bench_loopback_io
);

criterion_main!(benches);
