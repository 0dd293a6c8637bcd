//! VFS API tests

use core::sync::atomic::{AtomicUsize, Ordering};

use nos_vfs_api::error::errno;
use nos_vfs_api::*;
use proptest::prelude::*;

/// Driver exposing one fixed file backed by a single counted slot
struct OneFileDriver {
    refs: AtomicUsize,
    file: ConstFile,
}

struct ConstFile;

impl FileNode for ConstFile {
    fn read(&self, buf: &mut [u8]) -> VfsResult<usize> {
        let data = b"nos";
        let n = data.len().min(buf.len());
        buf[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }

    fn write(&self, _buf: &[u8]) -> VfsResult<usize> {
        Err(VfsError::NotSupported)
    }

    fn set_position(&self, _offset: i64, _whence: SeekWhence) -> VfsResult<u64> {
        Err(VfsError::NotSupported)
    }

    fn position(&self) -> VfsResult<u64> {
        Ok(0)
    }

    fn stat(&self) -> VfsResult<NodeStat> {
        Ok(NodeStat { kind: NodeKind::Regular, size: 3 })
    }

    fn mode(&self) -> OpenMode {
        OpenMode::READ
    }
}

unsafe impl ObjectOwner for OneFileDriver {
    unsafe fn retain(&self, _id: ObjectId) {
        self.refs.fetch_add(1, Ordering::Relaxed);
    }

    unsafe fn release(&self, _id: ObjectId) {
        self.refs.fetch_sub(1, Ordering::AcqRel);
    }

    fn ref_count(&self, _id: ObjectId) -> usize {
        self.refs.load(Ordering::Relaxed)
    }
}

impl Driver for OneFileDriver {
    fn root_name(&self) -> &str {
        "one"
    }

    fn open_directory(&self, _path: &str) -> VfsResult<DirectoryRef<'_>> {
        Err(VfsError::NotSupported)
    }

    fn open_file(&self, path: &str, _mode: OpenMode) -> VfsResult<FileRef<'_>> {
        if driver::strip_separators(path) != "version" {
            return Err(VfsError::NotFound);
        }
        self.refs.fetch_add(1, Ordering::AcqRel);
        // SAFETY: the count was just raised for this handle.
        let node = unsafe { NodeRef::from_raw(&self.file, self, ObjectId::new(0, 0)) };
        Ok(NodeRef::map::<dyn FileNode, _>(node, |f| f))
    }
}

#[test]
fn test_driver_through_trait_object() {
    let drv = OneFileDriver { refs: AtomicUsize::new(0), file: ConstFile };
    let dyn_drv: &dyn Driver = &drv;
    assert_eq!(dyn_drv.root_name(), "one");

    let file = dyn_drv.open_file("/version", OpenMode::READ).unwrap();
    let mut buf = [0u8; 8];
    assert_eq!(file.read(&mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], b"nos");
    assert_eq!(file.stat().unwrap().size, 3);
    assert!(file.stream().is_none());

    let again = NodeRef::retain(&file);
    assert_eq!(NodeRef::ref_count(&file), 2);
    assert!(NodeRef::ptr_eq(&file, &again));
    again.close();
    file.close();
    assert_eq!(drv.refs.load(Ordering::Relaxed), 0);

    assert_eq!(dyn_drv.open_file("missing", OpenMode::READ).unwrap_err(), VfsError::NotFound);
    assert_eq!(dyn_drv.open_directory("").unwrap_err(), VfsError::NotSupported);
}

#[test]
fn test_trait_object_handles_are_debug() {
    let drv = OneFileDriver { refs: AtomicUsize::new(0), file: ConstFile };
    let file = drv.open_file("version", OpenMode::READ).unwrap();
    let extra = NodeRef::retain(&file);
    assert_eq!(
        format!("{:?}", file),
        "NodeRef { id: ObjectId { index: 0, generation: 0 }, ref_count: 2 }"
    );
    drop(extra);

    let result: VfsResult<FileRef<'_>> = Ok(file);
    assert!(format!("{:?}", result).starts_with("Ok(NodeRef {"));
}

#[test]
fn test_error_display() {
    assert_eq!(format!("{}", VfsError::NotFound), "No such file or directory");
    assert_eq!(format!("{}", VfsError::Io(-5)), "I/O error: -5");
}

proptest! {
    #[test]
    fn prop_unknown_bits_detected(bits in any::<u32>()) {
        let mode = OpenMode::from_raw(bits);
        prop_assert_eq!(mode.has_unknown_bits(), bits & !0x3f != 0);
        prop_assert_eq!(mode.bits(), bits);
    }

    #[test]
    fn prop_foreign_errno_is_io(code in any::<i32>()) {
        let known = [
            errno::ENOENT, errno::ENOTDIR, errno::EISDIR,
            errno::EEXIST, errno::ENOSYS, errno::ENOMEM,
        ];
        prop_assume!(!known.contains(&code));
        let err = VfsError::from_errno(code);
        prop_assert_eq!(err, VfsError::Io(code));
        prop_assert_eq!(err.errno(), code);
    }
}
