pub mod c_list {
    use crate::other_list::{DoublyLinkedList, Node};
    use std::os::raw::{c_int, c_void};
    use std::ptr;

    /// 析构回调：参数为数据槽位的指针与元素大小
    ///
    /// 回调需要释放槽位中的数据并把槽位清空，且不允许失败
    pub type DllDtor = unsafe extern "C" fn(*mut *mut c_void, usize);

    /// 克隆回调：参数为数据指针与元素大小，返回一份独立的数据副本
    ///
    /// 返回的副本不允许与原数据共享存储，且不允许失败
    pub type DllClone = unsafe extern "C" fn(*mut c_void, usize) -> *mut c_void;

    /// 过滤谓词：返回 true 的元素会进入结果链表
    pub type DllPredicate = unsafe extern "C" fn(*const c_void) -> bool;

    // 不透明指针类型，对C完全隐藏实现细节
    //
    // 链表中混用不同类型/大小的数据属于调用方误用，后果未定义；
    // 一个链表只存一种 type_size 的数据。
    #[repr(C)]
    pub struct CDoublyLinkedList {
        inner: DoublyLinkedList<*mut c_void>,
        type_size: usize,
        dtor: Option<DllDtor>,
        clone: Option<DllClone>,
    }

    impl CDoublyLinkedList {
        // 沿用当前链表的 type_size 与回调，构造一个空链表
        fn like(&self) -> CDoublyLinkedList {
            CDoublyLinkedList {
                inner: DoublyLinkedList::new(),
                type_size: self.type_size,
                dtor: self.dtor,
                clone: self.clone,
            }
        }
    }

    // 迭代器结构，用于C端遍历
    #[repr(C)]
    pub struct CIterator {
        current: *mut Node<*mut c_void>,
    }

    // 错误码定义
    pub const DLL_SUCCESS: c_int = 0;
    pub const DLL_ERROR_NULL_PTR: c_int = -1;
    pub const DLL_ERROR_EMPTY: c_int = -2;
    pub const DLL_ERROR_OUT_OF_BOUNDS: c_int = -3;
    pub const DLL_ERROR_SAME_LIST: c_int = -4;

    /// 创建一个新的C语言接口可用的双向链表实例
    ///
    /// 参数:
    /// - `type_size`: 链表元素的大小（字节数），整个生命周期内固定。
    /// - `dtor`: 析构回调，链表释放数据时调用，允许为空（此时仅释放节点，
    ///   不处理数据本身）。
    /// - `clone`: 克隆回调，所有需要深拷贝的操作使用，允许为空（此时
    ///   深拷贝类操作返回空指针）。
    ///
    /// 返回值:
    /// - 返回指向新链表实例的裸指针，回调在链表的整个生命周期内有效。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_new(
        type_size: usize,
        dtor: Option<DllDtor>,
        clone: Option<DllClone>,
    ) -> *mut CDoublyLinkedList {
        Box::into_raw(Box::new(CDoublyLinkedList {
            inner: DoublyLinkedList::new(),
            type_size,
            dtor,
            clone,
        }))
    }

    /// 清空链表，对每个数据调用一次析构回调，但保留链表本身
    ///
    /// 参数:
    /// - `list`: 指向链表实例的可变裸指针。
    ///
    /// 返回值:
    /// - 指针为空时返回`DLL_ERROR_NULL_PTR`，否则返回`DLL_SUCCESS`。
    ///
    /// 注意:
    /// - 清空后链表句柄仍然有效，可以继续插入新元素。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_clear(list: *mut CDoublyLinkedList) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            let list = &mut *list;
            while let Some(mut data) = list.inner.pop_front() {
                if let Some(dtor) = list.dtor {
                    dtor(&mut data, list.type_size);
                }
            }
        }
        DLL_SUCCESS
    }

    /// 销毁由[dll_new]创建的链表，并把调用方的句柄置空
    ///
    /// 参数:
    /// - `list`: 指向链表句柄的指针，销毁后 `*list` 被置为空指针，
    ///   防止后续操作访问到已释放的链表。
    ///
    /// 注意:
    /// - 先对每个数据调用一次析构回调，再释放链表自身的内存。
    /// - 这是释放链表的唯一正确方式。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_drop(list: *mut *mut CDoublyLinkedList) {
        if list.is_null() {
            return;
        }

        unsafe {
            let handle = *list;
            if handle.is_null() {
                return;
            }
            dll_clear(handle);
            let _ = Box::from_raw(handle);
            *list = ptr::null_mut();
        }
    }

    /// 获取双向链表的当前元素数量
    ///
    /// 参数:
    /// - `list`: 指向链表实例的常量裸指针。
    ///
    /// 返回值:
    /// - 返回链表中元素的数量。如果输入指针为空，则返回0。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_len(list: *const CDoublyLinkedList) -> usize {
        if list.is_null() { 0 } else { unsafe { (*list).inner.len() } }
    }

    /// 检查双向链表是否为空
    ///
    /// 返回值:
    /// - 指针为空时返回`DLL_ERROR_NULL_PTR`；
    /// - 否则返回1表示空，0表示非空。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_is_empty(list: *const CDoublyLinkedList) -> c_int {
        if list.is_null() {
            DLL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    /// 获取链表头部数据的指针，数据所有权仍归链表
    ///
    /// 返回值:
    /// - 指针为空或链表为空时返回空指针，不再像早期C实现那样直接
    ///   终止进程。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_front(list: *const CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.front().copied().unwrap_or(ptr::null_mut()) }
    }

    /// 获取链表尾部数据的指针，数据所有权仍归链表
    ///
    /// 返回值:
    /// - 指针为空或链表为空时返回空指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_back(list: *const CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.back().copied().unwrap_or(ptr::null_mut()) }
    }

    /// 在双向链表的前端插入一个元素
    ///
    /// 参数:
    /// - `list`: 指向链表实例的可变裸指针。
    /// - `data`: 指向要插入数据的裸指针，所有权转移给链表。
    ///
    /// 返回值:
    /// - 指针为空时返回`DLL_ERROR_NULL_PTR`，否则返回`DLL_SUCCESS`。
    ///
    /// 复杂度: O(1)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_front(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.push_front(data);
        }
        DLL_SUCCESS
    }

    /// 在双向链表的尾端插入一个元素
    ///
    /// 参数:
    /// - `list`: 指向链表实例的可变裸指针。
    /// - `data`: 指向要插入数据的裸指针，所有权转移给链表。
    ///
    /// 返回值:
    /// - 指针为空时返回`DLL_ERROR_NULL_PTR`，否则返回`DLL_SUCCESS`。
    ///
    /// 复杂度: O(1)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_back(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.push_back(data);
        }
        DLL_SUCCESS
    }

    /// 移除并返回链表尾部的数据
    ///
    /// 返回值:
    /// - 指针为空或链表为空时返回空指针；
    /// - 否则返回尾部数据的指针，所有权转移给调用方，析构回调
    ///   不会被调用，调用方负责释放。
    ///
    /// 复杂度: O(1)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_pop(list: *mut CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.pop_back().unwrap_or(ptr::null_mut()) }
    }

    /// 在指定下标处插入一个元素
    ///
    /// 参数:
    /// - `list`: 指向链表实例的可变裸指针。
    /// - `index`: 插入位置，合法范围为 `0 ..= len`，等于 `len` 时等价于
    ///   尾端插入。
    /// - `data`: 指向要插入数据的裸指针，插入成功时所有权转移给链表。
    ///
    /// 返回值:
    /// - 指针为空时返回`DLL_ERROR_NULL_PTR`；
    /// - 下标越界时返回`DLL_ERROR_OUT_OF_BOUNDS`，链表不变；
    /// - 成功时返回`DLL_SUCCESS`。
    ///
    /// 注意:
    /// - 只有返回`DLL_SUCCESS`时所有权才转移给链表；返回错误码时
    ///   `data` 的所有权仍在调用方，仍由调用方负责释放。
    ///
    /// 复杂度: O(n)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_insert(
        list: *mut CDoublyLinkedList,
        index: usize,
        data: *mut c_void,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            match (*list).inner.insert(index, data) {
                Ok(()) => DLL_SUCCESS,
                Err(_) => DLL_ERROR_OUT_OF_BOUNDS,
            }
        }
    }

    /// 原地反转链表，不发生任何数据拷贝
    ///
    /// 复杂度: O(n)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_reverse_mut(list: *mut CDoublyLinkedList) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.reverse();
        }
        DLL_SUCCESS
    }

    /// 把 `other` 的全部节点拼接到 `list` 尾部
    ///
    /// 参数:
    /// - `list`: 接收节点的链表。
    /// - `other`: 捐出节点的链表，调用后变为空链表，句柄仍然有效，
    ///   仍需由调用方通过[dll_drop]释放。
    ///
    /// 返回值:
    /// - 任一指针为空时返回`DLL_ERROR_NULL_PTR`；
    /// - 两个指针指向同一个链表时返回`DLL_ERROR_SAME_LIST`，链表不变；
    /// - 否则返回`DLL_SUCCESS`。
    ///
    /// 注意:
    /// - 仅做指针拼接，不会调用任何析构或克隆回调。
    ///
    /// 复杂度: O(1)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_concat(
        list: *mut CDoublyLinkedList,
        other: *mut CDoublyLinkedList,
    ) -> c_int {
        if list.is_null() || other.is_null() {
            return DLL_ERROR_NULL_PTR;
        }
        // 同一链表不能既接收又捐出节点
        if list == other {
            return DLL_ERROR_SAME_LIST;
        }

        unsafe {
            let other = &mut *other;
            (*list).inner.append(&mut other.inner);
        }
        DLL_SUCCESS
    }

    /// 连接两个链表，返回一个全新的链表，两个输入链表保持不变
    ///
    /// 新链表依次包含 `list` 与 `other` 中每个数据的副本，副本通过
    /// `list` 构造时注册的克隆回调产生。
    ///
    /// 返回值:
    /// - 任一指针为空、或 `list` 没有注册克隆回调时返回空指针；
    /// - 否则返回新链表的指针，由调用方通过[dll_drop]释放。
    ///
    /// 复杂度: O(n + m)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_concat_clone(
        list: *const CDoublyLinkedList,
        other: *const CDoublyLinkedList,
    ) -> *mut CDoublyLinkedList {
        if list.is_null() || other.is_null() {
            return ptr::null_mut();
        }

        unsafe {
            let a = &*list;
            let b = &*other;
            let Some(clone) = a.clone else {
                return ptr::null_mut();
            };

            let mut out = a.like();
            for &data in a.inner.iter().chain(b.inner.iter()) {
                out.inner.push_back(clone(data, a.type_size));
            }
            Box::into_raw(Box::new(out))
        }
    }

    /// 使用自定义拷贝函数复制链表
    ///
    /// 参数:
    /// - `list`: 要复制的链表。
    /// - `f_cpy`: 对每个数据生成副本的函数，本次调用中覆盖链表自身
    ///   注册的克隆回调。
    ///
    /// 返回值:
    /// - 指针或 `f_cpy` 为空时返回空指针；
    /// - 否则返回结构相同的新链表，数据存储与原链表完全独立。
    ///
    /// 复杂度: O(n)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_copy(
        list: *const CDoublyLinkedList,
        f_cpy: Option<DllClone>,
    ) -> *mut CDoublyLinkedList {
        if list.is_null() {
            return ptr::null_mut();
        }
        let Some(f_cpy) = f_cpy else {
            return ptr::null_mut();
        };

        unsafe {
            let list = &*list;
            let mut out = list.like();
            for &data in list.inner.iter() {
                out.inner.push_back(f_cpy(data, list.type_size));
            }
            Box::into_raw(Box::new(out))
        }
    }

    /// 返回一个数据顺序相反的新链表，原链表保持不变
    ///
    /// 新链表中的数据为深拷贝副本（通过注册的克隆回调产生），避免
    /// 两个链表同时声称拥有同一份数据。
    ///
    /// 返回值:
    /// - 指针为空或没有注册克隆回调时返回空指针。
    ///
    /// 复杂度: O(n)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_reverse(list: *const CDoublyLinkedList) -> *mut CDoublyLinkedList {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe {
            let list = &*list;
            let Some(clone) = list.clone else {
                return ptr::null_mut();
            };

            let mut out = list.like();
            for &data in list.inner.iter() {
                out.inner.push_front(clone(data, list.type_size));
            }
            Box::into_raw(Box::new(out))
        }
    }

    /// 按谓词筛选数据，返回一个新链表
    ///
    /// 参数:
    /// - `list`: 要筛选的链表。
    /// - `p`: 谓词函数，返回true的数据会被深拷贝进新链表。
    ///
    /// 返回值:
    /// - 指针、谓词为空或没有注册克隆回调时返回空指针。
    ///
    /// 复杂度: O(n)
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_filter(
        list: *const CDoublyLinkedList,
        p: Option<DllPredicate>,
    ) -> *mut CDoublyLinkedList {
        if list.is_null() {
            return ptr::null_mut();
        }
        let Some(p) = p else {
            return ptr::null_mut();
        };

        unsafe {
            let list = &*list;
            let Some(clone) = list.clone else {
                return ptr::null_mut();
            };

            let mut out = list.like();
            for &data in list.inner.iter() {
                if p(data) {
                    out.inner.push_back(clone(data, list.type_size));
                }
            }
            Box::into_raw(Box::new(out))
        }
    }

    /// 获取双向链表的C语言接口兼容迭代器
    ///
    /// 迭代器初始化时指向链表的第一个节点，遍历期间不得修改链表。
    ///
    /// 返回值:
    /// - 指针为空时返回空指针，否则返回迭代器指针，由调用方通过
    ///   [dll_iter_free]释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_into_iter(list: *mut CDoublyLinkedList) -> *mut CIterator {
        if list.is_null() {
            return ptr::null_mut();
        }

        Box::into_raw(Box::new(CIterator {
            current: unsafe { (*list).inner.head },
        }))
    }

    /// 获取迭代器当前位置的数据并移动到下一个节点
    ///
    /// 返回值:
    /// - 迭代器指针为空或已到达末尾时返回空指针；
    /// - 否则返回当前节点中数据的指针，所有权仍归链表。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_iter_next(iter: *mut CIterator) -> *mut c_void {
        if iter.is_null() {
            return ptr::null_mut();
        }

        unsafe {
            if (*iter).current.is_null() {
                // 迭代器已经到达末尾，返回空指针
                ptr::null_mut()
            } else {
                let current_node = &*(*iter).current;
                let data = current_node.data;
                (*iter).current = current_node.next;
                data
            }
        }
    }

    /// 释放由[dll_into_iter]创建的迭代器
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_iter_free(iter: *mut CIterator) {
        if !iter.is_null() {
            unsafe {
                let _ = Box::from_raw(iter);
            }
        }
    }

}
