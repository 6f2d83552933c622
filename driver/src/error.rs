use kernel::KernelError;

/// Maps a driver specific failure onto the kernel error kinds.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
